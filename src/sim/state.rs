//! Game state and core simulation types
//!
//! The active collection of pills lives here, owned together with the field
//! bounds. It is only mutated through `step_all` and `remove_by_label`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::pill::WordPill;
use super::tick::{StepReport, tick};
use crate::normalize_label;
use crate::settings::GameConfig;

/// The field and every pill still bouncing around in it
#[derive(Debug, Clone)]
pub struct PillField {
    /// Field (canvas) dimensions
    pub(crate) bounds: Vec2,
    /// Live pills in collection order (also draw order)
    pub(crate) pills: Vec<WordPill>,
    /// Joint-step cap for collision separation
    pub(crate) max_separation_steps: u32,
    /// Seed the pills were spawned from
    seed: u64,
    /// Simulation tick counter
    pub(crate) time_ticks: u64,
}

impl PillField {
    /// Spawn one pill per configured animal, in order, from a seeded RNG
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bounds = config.field_size();
        let size = config.pill_size();

        let pills = config
            .animals
            .iter()
            .map(|name| WordPill::spawn(name.as_str(), bounds, size, config.max_start_speed, &mut rng))
            .collect();

        Self {
            bounds,
            pills,
            max_separation_steps: config.max_separation_steps,
            seed,
            time_ticks: 0,
        }
    }

    /// Build a field from explicitly placed pills
    pub fn with_pills(bounds: Vec2, pills: Vec<WordPill>, max_separation_steps: u32) -> Self {
        Self {
            bounds,
            pills,
            max_separation_steps,
            seed: 0,
            time_ticks: 0,
        }
    }

    /// Advance every pill by one tick
    pub fn step_all(&mut self) -> StepReport {
        tick(self)
    }

    /// Remove the first pill (in collection order) named by `transcript`.
    ///
    /// The transcript is trimmed and lowercased before comparing; labels are
    /// compared lowercased.
    pub fn remove_by_label(&mut self, transcript: &str) -> Option<WordPill> {
        let wanted = normalize_label(transcript);
        if wanted.is_empty() {
            return None;
        }
        let index = self.pills.iter().position(|p| p.matches(&wanted))?;
        Some(self.pills.remove(index))
    }

    #[inline]
    pub fn pills(&self) -> &[WordPill] {
        &self.pills
    }

    pub fn labels(&self) -> Vec<&str> {
        self.pills.iter().map(WordPill::label).collect()
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pills.len()
    }

    /// True once every pill has been caught
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zoo(labels: &[&str]) -> PillField {
        let size = Vec2::new(80.0, 30.0);
        let pills = labels
            .iter()
            .enumerate()
            .map(|(i, l)| WordPill::new(*l, Vec2::new(i as f32 * 100.0, 0.0), Vec2::ONE, size))
            .collect();
        PillField::with_pills(Vec2::new(800.0, 600.0), pills, 512)
    }

    #[test]
    fn test_new_spawns_configured_animals_in_order() {
        let config = GameConfig::default();
        let field = PillField::new(&config, 1234);
        assert_eq!(field.len(), 10);
        assert_eq!(field.labels()[0], "Lion");
        assert_eq!(field.labels()[9], "Penguin");
        assert_eq!(field.seed(), 1234);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let config = GameConfig::default();
        let a = PillField::new(&config, 99);
        let b = PillField::new(&config, 99);
        assert_eq!(a.pills(), b.pills());
    }

    #[test]
    fn test_remove_by_label_normalizes() {
        let mut field = zoo(&["Lion", "Tiger", "Elephant"]);
        let removed = field.remove_by_label("  TIGER ").unwrap();
        assert_eq!(removed.label(), "Tiger");
        assert_eq!(field.labels(), vec!["Lion", "Elephant"]);
    }

    #[test]
    fn test_remove_by_label_takes_first_duplicate() {
        let mut field = zoo(&["Lion", "Zebra", "Zebra"]);
        let removed = field.remove_by_label("zebra").unwrap();
        assert_eq!(removed.pos.x, 100.0);
        assert_eq!(field.labels(), vec!["Lion", "Zebra"]);
    }

    #[test]
    fn test_remove_by_label_miss_and_blank() {
        let mut field = zoo(&["Lion"]);
        assert!(field.remove_by_label("giraffe").is_none());
        assert!(field.remove_by_label("   ").is_none());
        assert_eq!(field.len(), 1);
    }
}
