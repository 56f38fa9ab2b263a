//! `<stoppingPlace>` structured rendering.

use std::fmt::Write as _;

use crate::model::Step;

const HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\n<stoppingPlace>\n";
const FOOTER: &str = "</stoppingPlace>\n";

pub(super) fn render(steps: &[Step]) -> String {
    let mut out = String::from(HEADER);
    for step in steps {
        let _ = writeln!(
            out,
            "    <step time=\"{}\" number=\"{}\"/>",
            step.time, step.count
        );
    }
    out.push_str(FOOTER);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_shape() {
        let steps = [Step::new(0.0, 1), Step::new(15.0, 0)];
        let expected = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\n\
                        <stoppingPlace>\n    \
                        <step time=\"0\" number=\"1\"/>\n    \
                        <step time=\"15\" number=\"0\"/>\n\
                        </stoppingPlace>\n";
        assert_eq!(render(&steps), expected);
    }

    #[test]
    fn empty_timeline_is_an_empty_document() {
        let text = render(&[]);
        assert!(text.starts_with("<?xml"));
        assert!(text.ends_with("<stoppingPlace>\n</stoppingPlace>\n"));
        assert!(!text.contains("<step"));
    }
}
