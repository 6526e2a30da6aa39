//! The playback session.

use wander_analytics::{
    AnalyticsError, EnsembleAccumulator, EnsembleAnalytics, ScalarStats, StatsAccumulator,
};
use wander_core::{Walk, WalkParams};
use wander_heatmap::{CellSize, VisitationGrid};
use wander_walk::generate_walks;

use crate::config::{ConfigError, SessionConfig};
use crate::heatmap_cache::HeatmapCache;

/// Everything observable at one cursor position.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Cursor position.
    pub step: usize,
    /// Statistics of the primary walk.
    pub stats: ScalarStats,
    /// Analytics over the whole walk set.
    pub analytics: EnsembleAnalytics,
    /// The cursor has reached [`Session::max_steps`].
    pub finished: bool,
}

/// A walk set plus a step cursor and the accumulators that follow it.
///
/// Exclusively owns its accumulators; drive it from one thread.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    walks: Vec<Walk>,
    cursor: usize,
    playing: bool,
    stats: StatsAccumulator,
    ensemble: EnsembleAccumulator,
    heatmap: HeatmapCache,
}

impl Session {
    /// Validate `config` and generate the initial walk set.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let walks = generate_walks(&config.params, config.walk_count)?;
        let heatmap = HeatmapCache::new(config.heatmap_cell_size()?, config.heatmap.all_walks);
        log_walk_set(&config, &walks);
        Ok(Self {
            config,
            walks,
            cursor: 0,
            playing: false,
            stats: StatsAccumulator::new(),
            ensemble: EnsembleAccumulator::new(),
            heatmap,
        })
    }

    // ── Accessors ──────────────────────────────────────────────

    /// Current configuration, reflecting every setter applied so far.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The walk set; index 0 is the primary walk.
    pub fn walks(&self) -> &[Walk] {
        &self.walks
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether [`tick`](Self::tick) advances the cursor.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Longest walk in the set, in steps.
    pub fn max_steps(&self) -> usize {
        self.walks.iter().map(Walk::steps).max().unwrap_or(0)
    }

    /// Whether the cursor has reached the end of the longest walk.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.max_steps()
    }

    /// The visitation grid at the cursor, when the heatmap is enabled and
    /// the cursor has moved past step 0.
    pub fn heatmap(&self) -> Option<&VisitationGrid> {
        if self.config.heatmap.enabled {
            self.heatmap.grid()
        } else {
            None
        }
    }

    // ── Playback ───────────────────────────────────────────────

    /// Start advancing on [`tick`](Self::tick). A finished session
    /// restarts from step 0.
    pub fn play(&mut self) {
        if self.playing {
            return;
        }
        if self.is_finished() {
            tracing::debug!(max_steps = self.max_steps(), "replaying from step 0");
            self.rewind();
        }
        self.playing = true;
    }

    /// Stop advancing; the cursor stays where it is.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// [`play`](Self::play) when paused, [`pause`](Self::pause) when playing.
    pub fn toggle_play(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Advance by `draw_speed` steps (if playing) and report the frame.
    ///
    /// Playback stops on its own once the cursor reaches
    /// [`max_steps`](Self::max_steps).
    pub fn tick(&mut self) -> Result<Frame, AnalyticsError> {
        if self.playing {
            self.cursor = self
                .cursor
                .saturating_add(self.config.draw_speed)
                .min(self.max_steps());
        }
        let frame = self.frame()?;
        if frame.finished && self.playing {
            tracing::debug!(step = self.cursor, "playback finished");
            self.playing = false;
        }
        Ok(frame)
    }

    /// Move the cursor to `step` (clamped to [`max_steps`](Self::max_steps))
    /// and report the frame. Playback state is unchanged.
    pub fn seek(&mut self, step: usize) -> Result<Frame, AnalyticsError> {
        self.cursor = step.min(self.max_steps());
        self.frame()
    }

    /// Stop playback and return to step 0 with every accumulator cleared.
    pub fn reset(&mut self) {
        self.playing = false;
        self.rewind();
    }

    /// Bring every accumulator to the cursor and collect the results.
    pub fn frame(&mut self) -> Result<Frame, AnalyticsError> {
        let primary = self.walks.first().ok_or(AnalyticsError::EmptyWalkSet)?;
        let stats = self
            .stats
            .compute(primary, self.cursor.min(primary.params().steps));
        let analytics = self.ensemble.compute(&self.walks, self.cursor)?;
        self.refresh_heatmap();
        Ok(Frame {
            step: self.cursor,
            stats,
            analytics,
            finished: self.is_finished(),
        })
    }

    // ── Reconfiguration ────────────────────────────────────────

    /// Regenerate the walk set from new parameters.
    ///
    /// The background grid spacing goes back to following the new step
    /// length; a spacing set through
    /// [`set_grid_cell_size`](Self::set_grid_cell_size) is discarded.
    pub fn set_params(&mut self, params: WalkParams) -> Result<(), ConfigError> {
        params.validate()?;
        let cell_size = CellSize::new(params.step_length * 2.0)?;
        self.config.params = params;
        self.config.grid_cell_size = None;
        self.heatmap.set_cell_size(cell_size);
        self.regenerate()
    }

    /// Regenerate the walk set with `count` walks.
    pub fn set_walk_count(&mut self, count: usize) -> Result<(), ConfigError> {
        if count == 0 {
            return Err(ConfigError::ZeroWalkCount);
        }
        self.config.walk_count = count;
        self.regenerate()
    }

    /// Turn the heatmap overlay on or off.
    pub fn set_heatmap_enabled(&mut self, enabled: bool) {
        self.config.heatmap.enabled = enabled;
        self.heatmap.invalidate();
        self.refresh_heatmap();
    }

    /// Aggregate all walks (or only the primary one) in the heatmap.
    pub fn set_heatmap_all_walks(&mut self, all_walks: bool) {
        self.config.heatmap.all_walks = all_walks;
        self.heatmap.set_all_walks(all_walks);
        self.refresh_heatmap();
    }

    /// Change the background grid spacing; heatmap cells are twice as wide.
    pub fn set_grid_cell_size(&mut self, size: f64) -> Result<(), ConfigError> {
        let cell_size = CellSize::new(size * 2.0)?;
        self.config.grid_cell_size = Some(size);
        self.heatmap.set_cell_size(cell_size);
        self.refresh_heatmap();
        Ok(())
    }

    /// Steps advanced per tick.
    pub fn set_draw_speed(&mut self, speed: usize) -> Result<(), ConfigError> {
        if speed == 0 {
            return Err(ConfigError::ZeroDrawSpeed);
        }
        self.config.draw_speed = speed;
        Ok(())
    }

    // ── Internals ──────────────────────────────────────────────

    fn regenerate(&mut self) -> Result<(), ConfigError> {
        self.walks = generate_walks(&self.config.params, self.config.walk_count)?;
        log_walk_set(&self.config, &self.walks);
        self.reset();
        Ok(())
    }

    fn rewind(&mut self) {
        self.cursor = 0;
        self.stats.reset();
        self.ensemble.reset();
        self.heatmap.invalidate();
    }

    fn refresh_heatmap(&mut self) {
        if !self.config.heatmap.enabled {
            return;
        }
        if self.cursor == 0 {
            self.heatmap.invalidate();
        } else {
            self.heatmap.update(&self.walks, self.cursor);
        }
    }
}

fn log_walk_set(config: &SessionConfig, walks: &[Walk]) {
    tracing::info!(
        seed = config.params.seed,
        walk_type = config.params.walk_type.as_str(),
        steps = config.params.steps,
        walks = walks.len(),
        "walk set generated"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use wander_core::WalkType;

    fn session(steps: usize, draw_speed: usize) -> Session {
        Session::new(SessionConfig {
            params: WalkParams::new(42, steps, 1.0, WalkType::Lattice),
            draw_speed,
            ..SessionConfig::default()
        })
        .unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_generates_walks() {
        let cfg = SessionConfig {
            walk_count: 3,
            ..SessionConfig::default()
        };
        let s = Session::new(cfg).unwrap();
        assert_eq!(s.walks().len(), 3);
        assert_eq!(s.walks()[1].params().seed, 43);
        assert_eq!(s.cursor(), 0);
        assert!(!s.is_playing());
        assert_eq!(s.max_steps(), 500);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let cfg = SessionConfig {
            walk_count: 0,
            ..SessionConfig::default()
        };
        assert_eq!(Session::new(cfg).unwrap_err(), ConfigError::ZeroWalkCount);
    }

    // ── Playback ────────────────────────────────────────────────

    #[test]
    fn tick_advances_only_while_playing() {
        let mut s = session(20, 5);
        assert_eq!(s.tick().unwrap().step, 0);
        s.play();
        assert_eq!(s.tick().unwrap().step, 5);
        s.pause();
        assert_eq!(s.tick().unwrap().step, 5);
    }

    #[test]
    fn tick_clamps_and_stops() {
        let mut s = session(12, 5);
        s.play();
        s.tick().unwrap();
        s.tick().unwrap();
        let last = s.tick().unwrap();
        assert_eq!(last.step, 12);
        assert!(last.finished);
        assert!(!s.is_playing());
        assert_eq!(last.stats.total_path_length, 12.0);
    }

    #[test]
    fn play_after_finish_restarts() {
        let mut s = session(10, 10);
        s.play();
        assert!(s.tick().unwrap().finished);
        s.play();
        assert_eq!(s.cursor(), 0);
        let f = s.tick().unwrap();
        assert_eq!(f.step, 10);
        assert_eq!(f.stats.total_path_length, 10.0);
    }

    #[test]
    fn toggle_play_flips() {
        let mut s = session(10, 1);
        s.toggle_play();
        assert!(s.is_playing());
        s.toggle_play();
        assert!(!s.is_playing());
    }

    #[test]
    fn seek_clamps_and_rebaselines() {
        let mut s = session(50, 5);
        let f = s.seek(500).unwrap();
        assert_eq!(f.step, 50);
        assert!(f.finished);
        let back = s.seek(20).unwrap();
        assert_eq!(back.stats.total_path_length, 20.0);
        assert!(back.analytics.msd_curve.iter().all(|p| p.t <= 20));
        assert!(!back.finished);
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut s = session(30, 5);
        s.play();
        s.tick().unwrap();
        s.reset();
        assert_eq!(s.cursor(), 0);
        assert!(!s.is_playing());
        let f = s.frame().unwrap();
        assert_eq!(f.stats, ScalarStats { total_steps: 30, ..ScalarStats::default() });
        assert!(f.analytics.msd_curve.is_empty());
    }

    // ── Reconfiguration ─────────────────────────────────────────

    #[test]
    fn set_params_regenerates_and_resets() {
        let mut s = session(30, 5);
        s.seek(15).unwrap();
        s.set_params(WalkParams::new(7, 40, 3.0, WalkType::Isotropic))
            .unwrap();
        assert_eq!(s.cursor(), 0);
        assert_eq!(s.max_steps(), 40);
        assert_eq!(s.walks()[0].params().seed, 7);
        assert_eq!(s.config().grid_cell_size(), 3.0);
    }

    #[test]
    fn set_params_rejects_invalid() {
        let mut s = session(30, 5);
        let bad = WalkParams::new(7, 40, 0.0, WalkType::Isotropic);
        assert!(matches!(s.set_params(bad), Err(ConfigError::Params(_))));
        assert_eq!(s.max_steps(), 30);
    }

    #[test]
    fn set_walk_count_regenerates() {
        let mut s = session(30, 5);
        s.set_walk_count(4).unwrap();
        assert_eq!(s.walks().len(), 4);
        assert_eq!(s.set_walk_count(0), Err(ConfigError::ZeroWalkCount));
        assert_eq!(s.walks().len(), 4);
    }

    #[test]
    fn set_draw_speed_validates() {
        let mut s = session(30, 5);
        assert_eq!(s.set_draw_speed(0), Err(ConfigError::ZeroDrawSpeed));
        s.set_draw_speed(7).unwrap();
        s.play();
        assert_eq!(s.tick().unwrap().step, 7);
    }

    #[test]
    fn huge_draw_speed_clamps_to_end() {
        let mut s = session(30, 5);
        s.seek(5).unwrap();
        s.set_draw_speed(usize::MAX).unwrap();
        s.play();
        let f = s.tick().unwrap();
        assert_eq!(f.step, 30);
        assert!(f.finished);
        assert!(!s.is_playing());
    }

    #[test]
    fn set_params_discards_custom_grid_spacing() {
        let mut s = session(30, 5);
        s.set_grid_cell_size(7.0).unwrap();
        assert_eq!(s.config().grid_cell_size(), 7.0);
        s.set_params(WalkParams::new(3, 30, 4.0, WalkType::Lattice))
            .unwrap();
        assert_eq!(s.config().grid_cell_size, None);
        assert_eq!(s.config().grid_cell_size(), 4.0);
    }

    // ── Heatmap ─────────────────────────────────────────────────

    #[test]
    fn heavy_tailed_walk_heatmap_is_bounded() {
        let params = WalkParams::new(42, 500, 5.0, WalkType::Levy).with_levy_alpha(0.1);
        let mut s = Session::new(SessionConfig {
            params,
            heatmap: crate::config::HeatmapConfig {
                enabled: true,
                all_walks: false,
            },
            ..SessionConfig::default()
        })
        .unwrap();
        let far = s.walks()[0]
            .points()
            .iter()
            .map(|p| p.norm())
            .fold(0.0, f64::max);
        assert!(far > 1.0e6, "walk only reached {far}");

        s.seek(10).unwrap();
        let grid = s.heatmap().unwrap();
        assert!(grid.cols() <= wander_heatmap::MAX_GRID_DIM);
        assert!(grid.rows() <= wander_heatmap::MAX_GRID_DIM);
        assert!(grid.cell_of(wander_core::Point::ORIGIN).is_some());
        s.seek(500).unwrap();
        assert!(s.heatmap().is_some());
    }

    #[test]
    fn heatmap_hidden_until_enabled() {
        let mut s = session(30, 5);
        s.seek(10).unwrap();
        assert!(s.heatmap().is_none());
        s.set_heatmap_enabled(true);
        assert!(s.heatmap().is_some());
        s.set_heatmap_enabled(false);
        assert!(s.heatmap().is_none());
    }

    #[test]
    fn heatmap_follows_cursor() {
        let mut s = session(40, 5);
        s.set_heatmap_enabled(true);
        s.seek(30).unwrap();
        s.seek(12).unwrap();
        let direct =
            wander_heatmap::compute_heatmap_grid(&s.walks()[0], CellSize::new(2.0).unwrap(), 12);
        assert_eq!(s.heatmap(), Some(&direct));
    }

    #[test]
    fn seek_to_zero_clears_heatmap() {
        let mut s = session(40, 5);
        s.set_heatmap_enabled(true);
        s.seek(25).unwrap();
        assert!(s.heatmap().is_some());
        s.seek(0).unwrap();
        assert!(s.heatmap().is_none());
    }

    #[test]
    fn grid_cell_size_rebuilds_heatmap() {
        let mut s = session(40, 5);
        s.set_heatmap_enabled(true);
        s.seek(20).unwrap();
        s.set_grid_cell_size(4.0).unwrap();
        assert_eq!(s.heatmap().map(|g| g.cell_size().get()), Some(8.0));
        assert!(s.set_grid_cell_size(-1.0).is_err());
        assert_eq!(s.config().grid_cell_size(), 4.0);
    }
}
