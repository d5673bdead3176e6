use crate::game::invader::Invader;
use crate::game::settings::Settings;
use crate::game::sprite::Sprite;

/// Grid dimensions of a freshly built fleet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FleetLayout {
    pub columns: usize,
    pub rows: usize,
}

impl FleetLayout {
    /// Fit as many invaders as the viewport allows at a pitch of two
    /// invader sizes, leaving three rows plus the ship's height free at the bottom.
    pub fn compute(settings: &Settings) -> Self {
        let w = settings.invader_width;
        let h = settings.invader_height;
        if w <= 0 || h <= 0 {
            return Self { columns: 0, rows: 0 };
        }

        let space_x = settings.screen_width as f32 - 0.1 * w as f32;
        let space_y = (settings.screen_height - 3 * h - settings.ship_height) as f32;
        let columns = (space_x / (2 * w) as f32).floor().max(0.0) as usize;
        let rows = (space_y / (2 * h) as f32).floor().max(0.0) as usize;
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.columns * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Owner of every live invader.
#[derive(Clone, Debug, Default)]
pub struct Fleet {
    invaders: Vec<Invader>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(settings: &Settings) -> Self {
        let mut fleet = Self::new();
        fleet.rebuild(settings);
        fleet
    }

    pub fn from_invaders(invaders: Vec<Invader>) -> Self {
        Self { invaders }
    }

    /// Replace the current invaders with a fresh grid. A degenerate layout
    /// leaves the fleet empty.
    pub fn rebuild(&mut self, settings: &Settings) {
        let layout = FleetLayout::compute(settings);
        let w = settings.invader_width as f32;
        let h = settings.invader_height as f32;

        self.invaders.clear();
        self.invaders.reserve(layout.len());
        for row in 0..layout.rows {
            for col in 0..layout.columns {
                let x = w + 2.0 * w * col as f32;
                let y = h + 2.0 * h * row as f32;
                self.invaders.push(Invader::new(x, y, settings));
            }
        }
    }

    pub fn invaders(&self) -> &[Invader] {
        &self.invaders
    }

    pub fn len(&self) -> usize {
        self.invaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invaders.is_empty()
    }

    pub fn clear(&mut self) {
        self.invaders.clear();
    }

    /// True if any invader touches a side edge.
    pub fn check_edges(&self, settings: &Settings) -> bool {
        self.invaders.iter().any(|invader| invader.check_edges(settings))
    }

    /// True if any invader has reached the bottom of the viewport.
    pub fn reached_bottom(&self, settings: &Settings) -> bool {
        self.invaders
            .iter()
            .any(|invader| invader.bounds().bottom() >= settings.screen_height)
    }

    /// One tick of fleet motion. An edge touch anywhere drops the whole
    /// fleet one row and reverses its direction before the horizontal step.
    /// Returns true when the fleet reversed.
    pub fn advance_fleet(&mut self, settings: &mut Settings) -> bool {
        let reversed = self.check_edges(settings);
        if reversed {
            for invader in &mut self.invaders {
                invader.drop_by(settings.fleet_drop_speed);
            }
            settings.reverse_fleet_direction();
        }

        let dx = settings.invader_speed() * settings.fleet_direction();
        for invader in &mut self.invaders {
            invader.shift(dx);
        }
        reversed
    }

    /// Remove the invaders at `indices`. Indices may be unsorted; duplicates
    /// and out-of-range values are ignored.
    pub(crate) fn remove_indices(&mut self, indices: &[usize]) {
        let mut doomed = vec![false; self.invaders.len()];
        for &i in indices {
            if let Some(slot) = doomed.get_mut(i) {
                *slot = true;
            }
        }
        let mut doomed = doomed.into_iter();
        self.invaders.retain(|_| !doomed.next().unwrap_or(false));
    }
}
