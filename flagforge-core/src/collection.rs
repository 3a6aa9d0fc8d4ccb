//! Element Collections - repeated instances of one kind in one layer

use crate::canvas::Canvas;
use crate::colors::ColorSequencer;
use crate::composition::LayerKind;
use crate::elements::FlagElement;
use crate::validation::ValidationViolation;

/// Same-kind elements painted in list order; later members cover earlier ones.
#[derive(Debug)]
pub struct ElementCollection {
    kind: LayerKind,
    elements: Vec<Box<dyn FlagElement>>,
}

impl ElementCollection {
    pub fn new<E: FlagElement + 'static>(kind: LayerKind, elements: Vec<E>) -> Self {
        Self {
            kind,
            elements: elements
                .into_iter()
                .map(|e| Box::new(e) as Box<dyn FlagElement>)
                .collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn render(&self, canvas: Canvas, colors: &mut ColorSequencer) -> Vec<String> {
        self.elements
            .iter()
            .flat_map(|element| element.render(canvas, colors))
            .collect()
    }

    /// The lone member's description, or a count summary.
    pub fn describe(&self, canvas: Canvas) -> String {
        match self.elements.as_slice() {
            [only] => only.describe(canvas),
            all => format!("{} {}", all.len(), self.kind.key()),
        }
    }

    /// One finding per failing member, tagged `"<Kind> <n>: "` (1-based).
    pub fn validate(&self, canvas: Canvas) -> Vec<ValidationViolation> {
        self.elements
            .iter()
            .enumerate()
            .filter_map(|(i, element)| {
                element.validate(canvas).map(|violation| {
                    violation.prefixed(&format!("{} {}", self.kind.member_name(), i + 1))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::test_support::{attr, canvas, sequencer};
    use crate::elements::{Circle, Cross};

    #[test]
    fn test_render_in_list_order() {
        let crosses = ElementCollection::new(
            LayerKind::Crosses,
            vec![Cross::new(10, 10, 2), Cross::new(20, 10, 2)],
        );
        let out = crosses.render(canvas(30, 20), &mut sequencer(&["#111111", "#222222"]));
        assert_eq!(out.len(), 2);
        assert_eq!(attr(&out[0], "fill"), Some("#111111"));
        assert_eq!(attr(&out[1], "fill"), Some("#222222"));
        assert!(attr(&out[0], "points").unwrap().starts_with("9,0 11,0"));
    }

    #[test]
    fn test_describe_single_vs_many() {
        let c = canvas(30, 20);
        let one = ElementCollection::new(LayerKind::Circles, vec![Circle::new(15, 10, 8)]);
        assert_eq!(one.describe(c), "circle at (15,10) radius 8");

        let two = ElementCollection::new(
            LayerKind::Crosses,
            vec![Cross::new(10, 10, 2), Cross::new(20, 10, 2)],
        );
        assert_eq!(two.describe(c), "2 crosses");
        assert_eq!((one.len(), two.len()), (1, 2));
    }

    #[test]
    fn test_validate_reports_every_failure() {
        let circles = ElementCollection::new(
            LayerKind::Circles,
            vec![Circle::new(40, 10, 2), Circle::new(5, 5, 2), Circle::new(5, 5, 0)],
        );
        let findings = circles.validate(canvas(30, 20));
        let messages: Vec<_> = findings.iter().map(|v| v.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Circle 1: Circle center point must be within SVG bounds",
                "Circle 3: Circle radius must be >= 1",
            ]
        );
    }
}
