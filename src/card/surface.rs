//! The rendering surface the widget mutates.
//!
//! A surface exposes the card template's named slots. The widget never
//! reads it back; all state lives in the widget itself.

use std::collections::HashMap;

use super::model::Side;

/// Stable identifiers of the template's view slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Container,
    Content,
    Front,
    FrontImage,
    FrontName,
    FrontDescription,
    Back,
    BackImage,
    BackName,
    BackDescription,
}

impl Slot {
    pub const ALL: [Slot; 10] = [
        Slot::Container,
        Slot::Content,
        Slot::Front,
        Slot::FrontImage,
        Slot::FrontName,
        Slot::FrontDescription,
        Slot::Back,
        Slot::BackImage,
        Slot::BackName,
        Slot::BackDescription,
    ];

    pub fn side(side: Side) -> Slot {
        match side {
            Side::Front => Slot::Front,
            Side::Back => Slot::Back,
        }
    }

    pub fn image(side: Side) -> Slot {
        match side {
            Side::Front => Slot::FrontImage,
            Side::Back => Slot::BackImage,
        }
    }

    pub fn name(side: Side) -> Slot {
        match side {
            Side::Front => Slot::FrontName,
            Side::Back => Slot::BackName,
        }
    }

    pub fn description(side: Side) -> Slot {
        match side {
            Side::Front => Slot::FrontDescription,
            Side::Back => Slot::BackDescription,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Slot::Container => "container",
            Slot::Content => "content",
            Slot::Front => "front",
            Slot::FrontImage => "frontImage",
            Slot::FrontName => "frontName",
            Slot::FrontDescription => "frontDescription",
            Slot::Back => "back",
            Slot::BackImage => "backImage",
            Slot::BackName => "backName",
            Slot::BackDescription => "backDescription",
        }
    }
}

/// Card-level transform: `rotateY(..) scale(..) translateX(..)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub rotate_y_deg: u32,
    pub scale: f32,
    pub translate_x: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        rotate_y_deg: 0,
        scale: 1.0,
        translate_x: 0.0,
    };

    pub fn rotated(deg: u32) -> Self {
        Self {
            rotate_y_deg: deg,
            ..Self::IDENTITY
        }
    }

    pub fn to_css(self) -> String {
        format!(
            "rotateY({}deg) scale({}) translateX({}px)",
            self.rotate_y_deg, self.scale, self.translate_x
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Mutation API of the card's rendering surface.
pub trait Surface {
    fn set_hidden(&mut self, slot: Slot, hidden: bool);

    fn set_text(&mut self, slot: Slot, text: &str);

    fn set_source(&mut self, slot: Slot, url: &str);

    /// Transform of a single side relative to the card.
    fn set_side_transform(&mut self, side: Side, transform: Transform);

    /// Transform of the whole card.
    fn set_transform(&mut self, transform: Transform);

    fn set_z_index(&mut self, z_index: i32);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotNode {
    pub hidden: bool,
    pub text: String,
    pub source: String,
}

/// In-memory surface.
///
/// Every call counts as one mutation, changed or not, so callers can
/// assert that an operation touched nothing.
#[derive(Debug, Clone)]
pub struct ViewTree {
    nodes: HashMap<Slot, SlotNode>,
    side_transforms: HashMap<Side, Transform>,
    transform: Transform,
    z_index: i32,
    mutations: u64,
}

impl ViewTree {
    pub fn new() -> Self {
        Self {
            nodes: Slot::ALL
                .into_iter()
                .map(|slot| (slot, SlotNode::default()))
                .collect(),
            side_transforms: HashMap::new(),
            transform: Transform::IDENTITY,
            z_index: 0,
            mutations: 0,
        }
    }

    pub fn node(&self, slot: Slot) -> &SlotNode {
        // Every slot is populated in `new`.
        &self.nodes[&slot]
    }

    pub fn is_hidden(&self, slot: Slot) -> bool {
        self.node(slot).hidden
    }

    pub fn text(&self, slot: Slot) -> &str {
        &self.node(slot).text
    }

    pub fn source(&self, slot: Slot) -> &str {
        &self.node(slot).source
    }

    pub fn side_transform(&self, side: Side) -> Transform {
        self.side_transforms
            .get(&side)
            .copied()
            .unwrap_or(Transform::IDENTITY)
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    pub fn mutations(&self) -> u64 {
        self.mutations
    }

    /// The side currently shown, if exactly one is.
    pub fn visible_side(&self) -> Option<Side> {
        match (self.is_hidden(Slot::Front), self.is_hidden(Slot::Back)) {
            (false, true) => Some(Side::Front),
            (true, false) => Some(Side::Back),
            _ => None,
        }
    }

    /// The sub-view slots of `side` that are not hidden.
    pub fn visible_sub_views(&self, side: Side) -> Vec<Slot> {
        [Slot::image(side), Slot::name(side), Slot::description(side)]
            .into_iter()
            .filter(|slot| !self.is_hidden(*slot))
            .collect()
    }

    fn node_mut(&mut self, slot: Slot) -> &mut SlotNode {
        self.mutations += 1;
        self.nodes.entry(slot).or_default()
    }
}

impl Default for ViewTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for ViewTree {
    fn set_hidden(&mut self, slot: Slot, hidden: bool) {
        self.node_mut(slot).hidden = hidden;
    }

    fn set_text(&mut self, slot: Slot, text: &str) {
        self.node_mut(slot).text = text.to_string();
    }

    fn set_source(&mut self, slot: Slot, url: &str) {
        self.node_mut(slot).source = url.to_string();
    }

    fn set_side_transform(&mut self, side: Side, transform: Transform) {
        self.mutations += 1;
        self.side_transforms.insert(side, transform);
    }

    fn set_transform(&mut self, transform: Transform) {
        self.mutations += 1;
        self.transform = transform;
    }

    fn set_z_index(&mut self, z_index: i32) {
        self.mutations += 1;
        self.z_index = z_index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tree_has_every_slot() {
        let tree = ViewTree::new();
        for slot in Slot::ALL {
            assert_eq!(tree.node(slot), &SlotNode::default());
        }
        assert_eq!(tree.mutations(), 0);
    }

    #[test]
    fn visible_side_requires_exactly_one() {
        let mut tree = ViewTree::new();
        assert_eq!(tree.visible_side(), None);
        tree.set_hidden(Slot::Back, true);
        assert_eq!(tree.visible_side(), Some(Side::Front));
        tree.set_hidden(Slot::Front, true);
        assert_eq!(tree.visible_side(), None);
        assert_eq!(tree.mutations(), 2);
    }

    #[test]
    fn transform_css_matches_template_format() {
        let t = Transform {
            rotate_y_deg: 15,
            scale: 1.5,
            translate_x: -3.0,
        };
        assert_eq!(t.to_css(), "rotateY(15deg) scale(1.5) translateX(-3px)");
    }
}
