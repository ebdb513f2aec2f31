use snakeview_common::Layer;

/// Per-category visibility. Every layer starts visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layers {
    pub fences: bool,
    pub food: bool,
    pub snakes: bool,
    pub enemies: bool,
}

impl Default for Layers {
    fn default() -> Self {
        Self {
            fences: true,
            food: true,
            snakes: true,
            enemies: true,
        }
    }
}

impl Layers {
    pub fn is_visible(&self, layer: Layer) -> bool {
        match layer {
            Layer::Fences => self.fences,
            Layer::Food => self.food,
            Layer::Snakes => self.snakes,
            Layer::Enemies => self.enemies,
        }
    }

    pub fn set_visible(&mut self, layer: Layer, visible: bool) {
        let flag = match layer {
            Layer::Fences => &mut self.fences,
            Layer::Food => &mut self.food,
            Layer::Snakes => &mut self.snakes,
            Layer::Enemies => &mut self.enemies,
        };
        *flag = visible;
    }

    /// Flip a layer and return its new visibility.
    pub fn toggle(&mut self, layer: Layer) -> bool {
        let visible = !self.is_visible(layer);
        self.set_visible(layer, visible);
        visible
    }
}
