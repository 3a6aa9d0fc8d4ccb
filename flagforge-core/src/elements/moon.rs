use serde::{Deserialize, Serialize};

use super::{FlagElement, COMPONENT_CLASS};
use crate::canvas::Canvas;
use crate::colors::ColorSequencer;
use crate::validation::ValidationViolation;

/// Crescent: a disc with an offset "bite" disc masked out of it.
///
/// `id` names the mask resource and must be unique per document; the
/// composition assigns it when the moon is added.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moon {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub mask_dx: f64,
    pub mask_dy: f64,
    pub mask_radius: f64,
    #[serde(skip)]
    pub id: usize,
}

impl Moon {
    pub fn new(
        center_x: f64,
        center_y: f64,
        radius: f64,
        mask_dx: f64,
        mask_dy: f64,
        mask_radius: f64,
    ) -> Self {
        Self {
            center_x,
            center_y,
            radius,
            mask_dx,
            mask_dy,
            mask_radius,
            id: 0,
        }
    }

    pub fn with_id(self, id: usize) -> Self {
        Self { id, ..self }
    }

    pub fn mask_id(&self) -> String {
        format!("moon-mask-{}", self.id)
    }

    fn mask_defs(&self) -> String {
        let bite_x = self.center_x + self.mask_dx;
        let bite_y = self.center_y + self.mask_dy;
        [
            "    <defs>".to_string(),
            format!(r#"        <mask id="{}">"#, self.mask_id()),
            format!(
                r#"            <circle cx="{}" cy="{}" r="{}" fill="white"/>"#,
                self.center_x, self.center_y, self.radius
            ),
            format!(
                r#"            <circle cx="{}" cy="{}" r="{}" fill="black"/>"#,
                bite_x, bite_y, self.mask_radius
            ),
            "        </mask>".to_string(),
            "    </defs>".to_string(),
        ]
        .join("\n")
    }
}

impl FlagElement for Moon {
    fn render(&self, _canvas: Canvas, colors: &mut ColorSequencer) -> Vec<String> {
        let fill = colors.next_color();
        let disc = format!(
            r#"    <circle class="{}" cx="{}" cy="{}" r="{}" fill="{}" mask="url(#{})"/>"#,
            COMPONENT_CLASS,
            self.center_x,
            self.center_y,
            self.radius,
            fill,
            self.mask_id()
        );
        vec![self.mask_defs(), disc]
    }

    fn describe(&self, _canvas: Canvas) -> String {
        format!(
            "moon at ({},{}) radius {} mask ({},{}) mask_radius {}",
            self.center_x, self.center_y, self.radius, self.mask_dx, self.mask_dy, self.mask_radius
        )
    }

    fn validate(&self, canvas: Canvas) -> Option<ValidationViolation> {
        if self.radius.is_nan() || self.radius < 1.0 {
            return Some(ValidationViolation::error("Moon radius must be >= 1"));
        }
        if self.mask_radius.is_nan() || self.mask_radius < 1.0 {
            return Some(ValidationViolation::error("Moon mask radius must be >= 1"));
        }
        if !canvas.contains_f64(self.center_x, self.center_y) {
            return Some(ValidationViolation::error(
                "Moon center point must be within SVG bounds",
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::test_support::{canvas, sequencer};

    #[test]
    fn test_render_mask_then_disc() {
        let moon = Moon::new(15.0, 10.0, 6.0, 3.0, -1.0, 5.0).with_id(2);
        let out = moon.render(canvas(30, 20), &mut sequencer(&["#ffffff"]));
        assert_eq!(out.len(), 2);
        assert!(out[0].starts_with("    <defs>"));
        assert!(out[0].contains(r#"<mask id="moon-mask-2">"#));
        assert!(out[0].contains(r#"<circle cx="15" cy="10" r="6" fill="white"/>"#));
        assert!(out[0].contains(r#"<circle cx="18" cy="9" r="5" fill="black"/>"#));
        assert_eq!(
            out[1],
            r##"    <circle class="flag-component" cx="15" cy="10" r="6" fill="#ffffff" mask="url(#moon-mask-2)"/>"##
        );
    }

    #[test]
    fn test_fractional_coordinates_kept() {
        let moon = Moon::new(12.5, 10.0, 6.0, 2.5, 0.0, 5.0);
        let out = moon.render(canvas(30, 20), &mut sequencer(&[]));
        assert!(out[0].contains(r#"cx="15" cy="10" r="5" fill="black""#));
        assert!(out[1].contains(r#"cx="12.5""#));
    }

    #[test]
    fn test_validation() {
        let c = canvas(30, 20);
        assert_eq!(Moon::new(15.0, 10.0, 6.0, 3.0, -1.0, 5.0).validate(c), None);
        assert_eq!(
            Moon::new(15.0, 10.0, 0.0, 3.0, -1.0, 5.0).validate(c).unwrap().message,
            "Moon radius must be >= 1"
        );
        assert_eq!(
            Moon::new(15.0, 10.0, 6.0, 3.0, -1.0, 0.5).validate(c).unwrap().message,
            "Moon mask radius must be >= 1"
        );
        assert_eq!(
            Moon::new(30.0, 10.0, 6.0, 3.0, -1.0, 5.0).validate(c).unwrap().message,
            "Moon center point must be within SVG bounds"
        );
    }

    #[test]
    fn test_id_not_deserialized() {
        let moon: Moon = serde_json::from_str(
            r#"{"centerX":15,"centerY":10,"radius":6,"maskDx":3,"maskDy":-1,"maskRadius":5}"#,
        )
        .unwrap();
        assert_eq!(moon.id, 0);
        assert_eq!(moon.mask_id(), "moon-mask-0");
    }
}
