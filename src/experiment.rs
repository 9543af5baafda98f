//! The accuracy sweep: estimates over a wide and a narrow region for a range
//! of sample counts, compared against the exact area.

use std::iter::StepBy;
use std::ops::RangeInclusive;

use tracing::{debug, info, warn};

use crate::{
    compute::ErrorMetrics,
    estimator::estimate_area,
    geometry::Circle,
    output::EstimateRecord,
    reference,
    region::Rect,
    sampler::SeedPolicy,
    Error, Result,
};

pub const SWEEP_START: usize = 100;
pub const SWEEP_STEP: usize = 500;
/// Inclusive upper bound of the sweep
pub const SWEEP_END: usize = 100_000;
pub const DEFAULT_PROGRESS_EVERY: usize = 20;

/// Arithmetic progression of sample counts, `start..=end` by `step`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sweep {
    start: usize,
    step: usize,
    end: usize,
}
impl Sweep {
    pub fn new(start: usize, step: usize, end: usize) -> Result<Self> {
        if start == 0 || step == 0 || start > end {
            return Err(Error::InvalidSweep { start, step, end });
        }
        Ok(Self { start, step, end })
    }
    pub fn start(&self) -> usize {
        self.start
    }
    pub fn step(&self) -> usize {
        self.step
    }
    pub fn end(&self) -> usize {
        self.end
    }
    /// Number of sample counts in the sweep
    pub fn len(&self) -> usize {
        (self.end - self.start) / self.step + 1
    }
    pub fn iter(&self) -> StepBy<RangeInclusive<usize>> {
        (self.start..=self.end).step_by(self.step)
    }
}
impl Default for Sweep {
    fn default() -> Self {
        Self {
            start: SWEEP_START,
            step: SWEEP_STEP,
            end: SWEEP_END,
        }
    }
}

/// Everything the sweep depends on
#[derive(Clone, Debug)]
pub struct ExperimentConfig {
    circles: Vec<Circle>,
    exact_area: f64,
    wide: Rect,
    narrow: Rect,
    sweep: Sweep,
    seeds: SeedPolicy,
    progress_every: usize,
}
impl ExperimentConfig {
    /// The three-circle reference configuration with the default sweep
    pub fn reference() -> Result<Self> {
        Ok(Self {
            circles: reference::reference_circles()?,
            exact_area: reference::exact_intersection_area(),
            wide: reference::wide_region()?,
            narrow: reference::narrow_region()?,
            sweep: Sweep::default(),
            seeds: SeedPolicy::default(),
            progress_every: DEFAULT_PROGRESS_EVERY,
        })
    }

    // Getters
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }
    pub fn exact_area(&self) -> f64 {
        self.exact_area
    }
    pub fn wide(&self) -> &Rect {
        &self.wide
    }
    pub fn narrow(&self) -> &Rect {
        &self.narrow
    }
    pub fn sweep(&self) -> &Sweep {
        &self.sweep
    }
    pub fn seeds(&self) -> SeedPolicy {
        self.seeds
    }
    pub fn progress_every(&self) -> usize {
        self.progress_every
    }

    // Setters
    /// Replaces the target circles together with their known exact area
    pub fn set_circles(&mut self, circles: Vec<Circle>, exact_area: f64) -> &mut Self {
        self.circles = circles;
        self.exact_area = exact_area;
        self
    }
    pub fn set_regions(&mut self, wide: Rect, narrow: Rect) -> &mut Self {
        self.wide = wide;
        self.narrow = narrow;
        self
    }
    pub fn set_sweep(&mut self, sweep: Sweep) -> &mut Self {
        self.sweep = sweep;
        self
    }
    pub fn set_seed_policy(&mut self, seeds: SeedPolicy) -> &mut Self {
        self.seeds = seeds;
        self
    }
    /// Records between progress reports; 0 disables them
    pub fn set_progress_every(&mut self, every: usize) -> &mut Self {
        self.progress_every = every;
        self
    }
}

/// Progress hooks called by [`run_with`]
pub trait Observer {
    fn on_start(&mut self, _config: &ExperimentConfig) {}
    fn on_record(&mut self, _index: usize, _record: &EstimateRecord) {}
    fn on_finish(&mut self, _records: &[EstimateRecord]) {}
}

impl Observer for () {}

/// Reports progress through `tracing`
pub struct LogObserver {
    every: usize,
    total: usize,
}
impl LogObserver {
    pub fn new(every: usize) -> Self {
        Self { every, total: 0 }
    }
}
impl Observer for LogObserver {
    fn on_start(&mut self, config: &ExperimentConfig) {
        self.total = config.sweep().len();
        info!(
            exact_area = config.exact_area(),
            wide_area = config.wide().area(),
            narrow_area = config.narrow().area(),
            steps = self.total,
            "starting experiment"
        );
    }
    fn on_record(&mut self, index: usize, record: &EstimateRecord) {
        debug!(?record);
        if self.every > 0 && (index + 1) % self.every == 0 {
            info!("processed N = {} ({}/{})", record.n, index + 1, self.total);
        }
    }
    fn on_finish(&mut self, records: &[EstimateRecord]) {
        info!(records = records.len(), "experiment complete");
    }
}

/// Estimates and errors for one sample count
pub fn record_for(config: &ExperimentConfig, n: usize) -> Result<EstimateRecord> {
    let seed = config.seeds().seed(n, 0);
    let exact = config.exact_area();

    let wide_area = estimate_area(config.circles(), config.wide(), n, seed)?;
    let narrow_area = estimate_area(config.circles(), config.narrow(), n, seed)?;
    let wide = ErrorMetrics::new(wide_area, exact);
    let narrow = ErrorMetrics::new(narrow_area, exact);
    if wide.relative.is_none() || narrow.relative.is_none() {
        warn!(n, exact, "relative error undefined");
    }

    Ok(EstimateRecord {
        n,
        wide_area,
        wide_relative_error: wide.relative,
        narrow_area,
        narrow_relative_error: narrow.relative,
        wide_absolute_error: wide.absolute,
        narrow_absolute_error: narrow.absolute,
    })
}

/// Runs the sweep, logging progress, and returns one record per sample count
/// in ascending order.
pub fn run(config: &ExperimentConfig) -> Result<Vec<EstimateRecord>> {
    run_with(config, &mut LogObserver::new(config.progress_every()))
}

pub fn run_with<O: Observer + ?Sized>(
    config: &ExperimentConfig,
    observer: &mut O,
) -> Result<Vec<EstimateRecord>> {
    observer.on_start(config);
    let mut records = Vec::with_capacity(config.sweep().len());
    for (index, n) in config.sweep().iter().enumerate() {
        let record = record_for(config, n)?;
        observer.on_record(index, &record);
        records.push(record);
    }
    observer.on_finish(&records);
    Ok(records)
}

/// Independent repeated estimates at one sample count
#[derive(Clone, Debug, PartialEq)]
pub struct Replication {
    pub n: usize,
    pub estimates: Vec<f64>,
    pub mean: f64,
    /// Sample standard deviation, 0 for a single repetition
    pub std_dev: f64,
    /// Mean of the per-repetition relative errors, `None` if undefined
    pub mean_relative_error: Option<f64>,
}

/// Repeats the estimate over `rect` `repetitions` times with seeds from the
/// configured policy.
pub fn replicate(
    config: &ExperimentConfig,
    rect: &Rect,
    n: usize,
    repetitions: usize,
) -> Result<Replication> {
    if repetitions == 0 {
        return Err(Error::ZeroRepetitions);
    }
    if repetitions > 1 && config.seeds() == SeedPolicy::SweepIndex {
        warn!(n, "seed = N gives identical repetitions, use a derived seed policy");
    }

    let estimates = (0..repetitions)
        .map(|rep| estimate_area(config.circles(), rect, n, config.seeds().seed(n, rep)))
        .collect::<Result<Vec<f64>>>()?;

    let count = estimates.len() as f64;
    let mean = estimates.iter().sum::<f64>() / count;
    let std_dev = if estimates.len() > 1 {
        (estimates.iter().map(|e| (e - mean).powi(2)).sum::<f64>() / (count - 1.0)).sqrt()
    } else {
        0.0
    };
    let mean_relative_error = estimates
        .iter()
        .map(|&e| ErrorMetrics::new(e, config.exact_area()).relative)
        .sum::<Option<f64>>()
        .map(|total| total / count);

    Ok(Replication {
        n,
        estimates,
        mean,
        std_dev,
        mean_relative_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn small_config() -> ExperimentConfig {
        let mut config = ExperimentConfig::reference().unwrap();
        config.set_sweep(Sweep::new(100, 500, 2100).unwrap());
        config
    }

    #[test]
    fn test_default_sweep() {
        let sweep = Sweep::default();
        assert_eq!(sweep.len(), 200);
        assert_eq!(sweep.iter().count(), 200);
        assert_eq!(sweep.iter().next(), Some(100));
        assert_eq!(sweep.iter().last(), Some(99_600));
    }

    #[test]
    fn test_sweep_rejects_invalid() {
        assert!(matches!(Sweep::new(0, 1, 10), Err(Error::InvalidSweep { .. })));
        assert!(Sweep::new(1, 0, 10).is_err());
        assert!(Sweep::new(11, 1, 10).is_err());
        assert_eq!(Sweep::new(5, 100, 5).unwrap().len(), 1);
    }

    #[test]
    fn test_run_small_sweep() {
        let config = small_config();
        let records = run_with(&config, &mut ()).unwrap();
        let ns: Vec<usize> = records.iter().map(|r| r.n).collect();
        assert_eq!(ns, [100, 600, 1100, 1600, 2100]);
        for r in &records {
            assert!(r.wide_area >= 0.0 && r.wide_area <= 9.0);
            assert!(r.narrow_area >= 0.0 && r.narrow_area <= 1.0);
            let wide_rel = r.wide_relative_error.unwrap();
            assert!(wide_rel.is_finite() && wide_rel >= 0.0);
            assert!((wide_rel * config.exact_area() - r.wide_absolute_error).abs() < 1e-12);
        }
    }

    #[test]
    fn test_record_uses_sweep_index_seed() {
        let config = small_config();
        let record = record_for(&config, 600).unwrap();
        let wide = estimate_area(config.circles(), config.wide(), 600, 600).unwrap();
        let narrow = estimate_area(config.circles(), config.narrow(), 600, 600).unwrap();
        assert_eq!(record.wide_area.to_bits(), wide.to_bits());
        assert_eq!(record.narrow_area.to_bits(), narrow.to_bits());
    }

    #[test]
    fn test_run_reproducible() {
        let config = small_config();
        assert_eq!(run(&config).unwrap(), run(&config).unwrap());
    }

    #[test]
    fn test_undefined_relative_error() {
        let mut config = small_config();
        let circles = config.circles().to_vec();
        config.set_circles(circles, 0.0);
        let record = record_for(&config, 100).unwrap();
        assert_eq!(record.wide_relative_error, None);
        assert_eq!(record.narrow_relative_error, None);
        assert_eq!(record.wide_absolute_error, record.wide_area);
    }

    #[test]
    fn test_custom_configuration() {
        let mut config = small_config();
        let disk = Circle::new(Point::new(0.0, 0.0), 1.0).unwrap();
        config
            .set_circles(vec![disk], disk.area())
            .set_regions(Rect::square(-2.0, 2.0).unwrap(), Rect::square(-1.0, 1.0).unwrap())
            .set_sweep(Sweep::new(50_000, 1, 50_000).unwrap());
        let records = run_with(&config, &mut ()).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].wide_relative_error.unwrap() < 0.05);
        assert!(records[0].narrow_relative_error.unwrap() < 0.05);
    }

    struct Counting {
        started: bool,
        seen: Vec<usize>,
        finished: usize,
    }
    impl Observer for Counting {
        fn on_start(&mut self, _config: &ExperimentConfig) {
            self.started = true;
        }
        fn on_record(&mut self, index: usize, record: &EstimateRecord) {
            assert_eq!(index, self.seen.len());
            self.seen.push(record.n);
        }
        fn on_finish(&mut self, records: &[EstimateRecord]) {
            self.finished = records.len();
        }
    }

    #[test]
    fn test_observer_hooks() {
        let mut observer = Counting {
            started: false,
            seen: Vec::new(),
            finished: 0,
        };
        run_with(&small_config(), &mut observer).unwrap();
        assert!(observer.started);
        assert_eq!(observer.seen, [100, 600, 1100, 1600, 2100]);
        assert_eq!(observer.finished, 5);
    }

    #[test]
    fn test_replicate_derived_seeds() {
        let mut config = small_config();
        config.set_seed_policy(SeedPolicy::Derived { base: 2024 });
        let wide = *config.wide();
        let rep = replicate(&config, &wide, 2000, 8).unwrap();
        assert_eq!(rep.estimates.len(), 8);
        assert!(rep.std_dev > 0.0);
        assert!(rep.mean_relative_error.unwrap() > 0.0);

        let again = replicate(&config, &wide, 2000, 8).unwrap();
        assert_eq!(rep, again);
    }

    #[test]
    fn test_replicate_sweep_index_identical() {
        let config = small_config();
        let wide = *config.wide();
        let rep = replicate(&config, &wide, 600, 3).unwrap();
        assert!(rep.estimates.iter().all(|&e| e == rep.estimates[0]));
        assert_eq!(rep.std_dev, 0.0);
        assert!(matches!(
            replicate(&config, &wide, 600, 0),
            Err(Error::ZeroRepetitions)
        ));
    }

    #[test]
    fn test_replicated_error_shrinks_with_n() {
        let mut config = small_config();
        config.set_seed_policy(SeedPolicy::Derived { base: 7 });
        let wide = *config.wide();
        let coarse = replicate(&config, &wide, 200, 40).unwrap();
        let fine = replicate(&config, &wide, 20_000, 40).unwrap();
        assert!(fine.mean_relative_error.unwrap() < coarse.mean_relative_error.unwrap());
        assert!(fine.std_dev < coarse.std_dev);
    }
}
