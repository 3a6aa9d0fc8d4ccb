//! Composition Engine - Layered Flag Assembly
//!
//! Layers paint back-to-front in a fixed order regardless of the order
//! they were added. Descriptions keep the add order.

use tracing::debug;

use crate::canvas::Canvas;
use crate::collection::ElementCollection;
use crate::colors::ColorSequencer;
use crate::elements::{
    Background, Bars, Canton, Circle, Cross, FlagElement, Moon, Rect, Side, Star, Triangle,
};
use crate::validation::ValidationReport;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const DESCRIPTION_SEPARATOR: &str = " + ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Background,
    Bars,
    Sides,
    Canton,
    Crosses,
    Circles,
    Rects,
    Triangles,
    Stars,
    Moons,
}

impl LayerKind {
    pub const COUNT: usize = 10;

    /// Paint order, back to front.
    pub const ALL: [LayerKind; Self::COUNT] = [
        LayerKind::Background,
        LayerKind::Bars,
        LayerKind::Sides,
        LayerKind::Canton,
        LayerKind::Crosses,
        LayerKind::Circles,
        LayerKind::Rects,
        LayerKind::Triangles,
        LayerKind::Stars,
        LayerKind::Moons,
    ];

    pub fn key(self) -> &'static str {
        match self {
            LayerKind::Background => "background",
            LayerKind::Bars => "bars",
            LayerKind::Sides => "sides",
            LayerKind::Canton => "canton",
            LayerKind::Crosses => "crosses",
            LayerKind::Circles => "circles",
            LayerKind::Rects => "rects",
            LayerKind::Triangles => "triangles",
            LayerKind::Stars => "stars",
            LayerKind::Moons => "moons",
        }
    }

    /// Capitalized name of one member, used to tag collection findings.
    pub fn member_name(self) -> &'static str {
        match self {
            LayerKind::Background => "Background",
            LayerKind::Bars => "Bars",
            LayerKind::Sides => "Side",
            LayerKind::Canton => "Canton",
            LayerKind::Crosses => "Cross",
            LayerKind::Circles => "Circle",
            LayerKind::Rects => "Rect",
            LayerKind::Triangles => "Triangle",
            LayerKind::Stars => "Star",
            LayerKind::Moons => "Moon",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Contents of one layer slot.
#[derive(Debug)]
enum Layer {
    Single(Box<dyn FlagElement>),
    Collection(ElementCollection),
}

impl Layer {
    fn render(&self, canvas: Canvas, colors: &mut ColorSequencer) -> Vec<String> {
        match self {
            Layer::Single(element) => element.render(canvas, colors),
            Layer::Collection(collection) => collection.render(canvas, colors),
        }
    }

    fn describe(&self, canvas: Canvas) -> String {
        match self {
            Layer::Single(element) => element.describe(canvas),
            Layer::Collection(collection) => collection.describe(canvas),
        }
    }

    fn members(&self) -> usize {
        match self {
            Layer::Single(_) => 1,
            Layer::Collection(collection) => collection.len(),
        }
    }

    fn validate(&self, canvas: Canvas, report: &mut ValidationReport) {
        match self {
            Layer::Single(element) => report.extend(element.validate(canvas)),
            Layer::Collection(collection) => report.extend(collection.validate(canvas)),
        }
    }
}

/// One flag under construction: canvas, color source and layer table.
///
/// Each generation request owns its own composition. Rendering advances
/// the color cursor, so a second `render` without `reset_colors` draws
/// the next colors rather than replaying the palette.
#[derive(Debug)]
pub struct Composition {
    canvas: Canvas,
    colors: ColorSequencer,
    layers: [Option<Layer>; LayerKind::COUNT],
    descriptions: Vec<String>,
}

impl Composition {
    pub fn new(canvas: Canvas, colors: ColorSequencer) -> Self {
        Self {
            canvas,
            colors,
            layers: std::array::from_fn(|_| None),
            descriptions: Vec::new(),
        }
    }

    pub fn add_background(&mut self) {
        self.add_background_labeled("background");
    }

    /// Background whose description fragment reads `label`.
    pub fn add_background_labeled(&mut self, label: impl Into<String>) {
        self.layers[LayerKind::Background.index()] = Some(Layer::Single(Box::new(Background)));
        let label = label.into();
        debug!(kind = "background", description = %label, "layer added");
        self.descriptions.push(label);
    }

    pub fn add_bars(&mut self, bars: Bars) {
        self.set_single(LayerKind::Bars, bars);
    }

    pub fn add_canton(&mut self, canton: Canton) {
        self.set_single(LayerKind::Canton, canton);
    }

    pub fn add_sides(&mut self, sides: Vec<Side>) {
        self.set_collection(LayerKind::Sides, sides);
    }

    pub fn add_crosses(&mut self, crosses: Vec<Cross>) {
        self.set_collection(LayerKind::Crosses, crosses);
    }

    pub fn add_circles(&mut self, circles: Vec<Circle>) {
        self.set_collection(LayerKind::Circles, circles);
    }

    pub fn add_rects(&mut self, rects: Vec<Rect>) {
        self.set_collection(LayerKind::Rects, rects);
    }

    pub fn add_triangles(&mut self, triangles: Vec<Triangle>) {
        self.set_collection(LayerKind::Triangles, triangles);
    }

    pub fn add_stars(&mut self, stars: Vec<Star>) {
        self.set_collection(LayerKind::Stars, stars);
    }

    /// Each moon's mask id is its index in `moons`.
    pub fn add_moons(&mut self, moons: Vec<Moon>) {
        let moons: Vec<Moon> = moons
            .into_iter()
            .enumerate()
            .map(|(i, moon)| moon.with_id(i))
            .collect();
        self.set_collection(LayerKind::Moons, moons);
    }

    // Overwrites the slot; the previous description fragment stays.
    fn set_single<E: FlagElement + 'static>(&mut self, kind: LayerKind, element: E) {
        self.install(kind, Layer::Single(Box::new(element)));
    }

    fn set_collection<E: FlagElement + 'static>(&mut self, kind: LayerKind, elements: Vec<E>) {
        self.install(kind, Layer::Collection(ElementCollection::new(kind, elements)));
    }

    fn install(&mut self, kind: LayerKind, layer: Layer) {
        let description = layer.describe(self.canvas);
        debug!(
            kind = kind.key(),
            members = layer.members(),
            description = %description,
            "layer added"
        );
        self.descriptions.push(description);
        self.layers[kind.index()] = Some(layer);
    }

    /// Populated layers in paint order.
    pub fn populated(&self) -> Vec<LayerKind> {
        LayerKind::ALL
            .into_iter()
            .filter(|kind| self.layers[kind.index()].is_some())
            .collect()
    }

    /// Collects every finding; nothing short-circuits and nothing is mutated.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        for kind in LayerKind::ALL {
            if let Some(layer) = &self.layers[kind.index()] {
                layer.validate(self.canvas, &mut report);
            }
        }
        report
    }

    /// Fragments of every populated layer, back to front.
    pub fn render_fragments(&mut self) -> Vec<String> {
        let mut fragments = Vec::new();
        for kind in LayerKind::ALL {
            if let Some(layer) = &self.layers[kind.index()] {
                fragments.extend(layer.render(self.canvas, &mut self.colors));
            }
        }
        debug!(
            fragments = fragments.len(),
            palette_left = self.colors.remaining(),
            "render pass complete"
        );
        fragments
    }

    /// The complete SVG document, one element per line.
    ///
    /// Only meaningful once [`Composition::validate`] reports no errors.
    pub fn render(&mut self) -> String {
        let header = format!(
            r#"<svg viewBox="{}" xmlns="{}">"#,
            self.canvas.view_box(),
            SVG_NAMESPACE
        );
        let mut lines = vec![header];
        lines.extend(self.render_fragments());
        lines.push("</svg>".to_string());
        lines.join("\n")
    }

    /// Rewinds the palette for another render pass.
    pub fn reset_colors(&mut self) {
        self.colors.reset();
    }

    /// Add-order description fragments joined with `" + "`.
    pub fn describe(&self) -> String {
        self.descriptions.join(DESCRIPTION_SEPARATOR)
    }

    /// `"{width}x{height} {description}"`.
    pub fn summary(&self) -> String {
        format!("{} {}", self.canvas, self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::test_support::{canvas, sequencer};
    use crate::elements::Orientation;

    #[test]
    fn test_layer_order_is_fixed() {
        assert_eq!(LayerKind::ALL[0], LayerKind::Background);
        assert_eq!(LayerKind::ALL[9], LayerKind::Moons);
        for (i, kind) in LayerKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_empty_composition_renders_bare_document() {
        let mut flag = Composition::new(canvas(3, 2), sequencer(&[]));
        assert_eq!(
            flag.render(),
            "<svg viewBox=\"0 0 3 2\" xmlns=\"http://www.w3.org/2000/svg\">\n</svg>"
        );
        assert!(flag.validate().is_clean());
    }

    #[test]
    fn test_render_document() {
        let mut flag = Composition::new(canvas(18, 15), sequencer(&["#002395", "#ffffff", "#ed2939"]));
        flag.add_bars(Bars::equal(Orientation::Vertical, 3));
        let svg = flag.render();
        let lines: Vec<_> = svg.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            r#"<svg viewBox="0 0 18 15" xmlns="http://www.w3.org/2000/svg">"#
        );
        assert!(lines[1].contains(r##"x="0" y="0" width="6" height="15" fill="#002395""##));
        assert!(lines[2].contains(r##"x="6" y="0" width="6" height="15" fill="#ffffff""##));
        assert!(lines[3].contains(r##"x="12" y="0" width="6" height="15" fill="#ed2939""##));
        assert_eq!(lines[4], "</svg>");
    }

    #[test]
    fn test_description_follows_add_order() {
        let mut flag = Composition::new(canvas(30, 20), sequencer(&[]));
        flag.add_crosses(vec![Cross::new(15, 10, 6)]);
        flag.add_background();
        assert_eq!(flag.describe(), "cross at (15,10) width 6 + background");
        assert_eq!(flag.summary(), "30x20 cross at (15,10) width 6 + background");
        assert_eq!(flag.populated(), vec![LayerKind::Background, LayerKind::Crosses]);
    }

    #[test]
    fn test_readd_overwrites_slot_but_keeps_description() {
        let mut flag = Composition::new(canvas(30, 20), sequencer(&[]));
        flag.add_canton(Canton::new(10, 5));
        flag.add_canton(Canton::new(12, 7));
        assert_eq!(flag.describe(), "canton (10x5) + canton (12x7)");
        let svg = flag.render();
        assert!(svg.contains(r#"width="12" height="7""#));
        assert!(!svg.contains(r#"width="10" height="5""#));
    }

    #[test]
    fn test_moon_ids_assigned_per_call() {
        let mut flag = Composition::new(canvas(40, 30), sequencer(&[]));
        flag.add_moons(vec![
            Moon::new(10.0, 10.0, 5.0, 2.0, -2.0, 4.0),
            Moon::new(30.0, 20.0, 5.0, 2.0, -2.0, 4.0),
        ]);
        let svg = flag.render();
        assert!(svg.contains(r#"<mask id="moon-mask-0">"#));
        assert!(svg.contains(r#"<mask id="moon-mask-1">"#));
        assert_eq!(flag.describe(), "2 moons");
    }

    #[test]
    fn test_validate_separates_warnings() {
        let mut flag = Composition::new(canvas(20, 10), sequencer(&[]));
        flag.add_bars(Bars::equal(Orientation::Vertical, 3));
        flag.add_circles(vec![Circle::new(25, 5, 2)]);
        let report = flag.validate();
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.errors[0].message,
            "Circle 1: Circle center point must be within SVG bounds"
        );
        assert!(report.is_blocking());
    }

    #[test]
    fn test_reset_colors_replays_palette() {
        let mut flag = Composition::new(canvas(10, 10), sequencer(&["#abcdef"]));
        flag.add_background();
        let first = flag.render();
        flag.reset_colors();
        assert_eq!(flag.render(), first);
    }
}
