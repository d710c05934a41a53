//! Solution Execution
//!
//! Runs a resolved solution once or repeatedly under its platform's input
//! discipline.
//!
//! ## Benchmark iteration
//!
//! ```text
//! provision input (once, untimed)
//!        │
//!        ▼
//! ┌──────────────────────────────┐
//! │ refresh input                │
//! │ suppress stdout/stderr       │
//! │ time the invocation          │  × iterations
//! │ restore stdout/stderr        │
//! │ report progress              │
//! └──────────────┬───────────────┘
//!                │
//!                ▼
//! release input (every exit path)
//! ```
//!
//! A failing iteration aborts the whole run; samples collected so far are
//! discarded.

use super::progress::ProgressReporter;
use crate::platform::PlatformHandler;
use solvekit_core::{
    HarnessError, OutputSuppression, SolutionDef, SolutionSpecifier, Timer, find_solution, invoke,
};
use solvekit_stats::SampleSet;
use std::path::PathBuf;

/// Fewest iterations that still give meaningful quartiles
pub const MIN_ITERATIONS: usize = 3;

/// Samples reserved up front; longer runs grow the buffer as they go
const PREALLOCATED_SAMPLES: usize = 1 << 16;

/// Settings for one harness invocation
#[derive(Debug, Clone)]
pub struct ExecutionConfig {
    /// Root of the `{Platform}/i_{Name}_{Test}.txt` tree
    pub inputs_dir: PathBuf,
    /// Where raw sample exports go
    pub export_dir: PathBuf,
    /// Show an indicatif bar while benchmarking
    pub progress_bar: bool,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            inputs_dir: PathBuf::from("."),
            export_dir: PathBuf::from("."),
            progress_bar: true,
        }
    }
}

/// Find the solution `spec` names on this handler's platform and check it
/// accepts the platform's argument shape.
pub fn resolve_solution(
    handler: &dyn PlatformHandler,
    spec: &SolutionSpecifier,
) -> Result<&'static SolutionDef, HarnessError> {
    let def = find_solution(handler.id(), spec.name()).ok_or_else(|| {
        HarnessError::EntryPointNotFound {
            platform: handler.id().to_string(),
            name: spec.name().to_string(),
            detail: "no solution with this name is registered".to_string(),
        }
    })?;
    check_shape(handler, def)?;
    tracing::debug!(solution = %def.qualified_name(), file = def.file, line = def.line, "resolved solution");
    Ok(def)
}

fn check_shape(handler: &dyn PlatformHandler, def: &SolutionDef) -> Result<(), HarnessError> {
    let expected = handler.entry_shape();
    let actual = def.entry.shape();
    if expected == actual {
        return Ok(());
    }
    Err(HarnessError::EntryPointNotFound {
        platform: handler.id().to_string(),
        name: def.name.to_string(),
        detail: format!(
            "the solution takes {} but {} supplies {}",
            actual,
            handler.id(),
            expected
        ),
    })
}

/// Run `def` once with its output visible. Returns the elapsed nanoseconds
/// around the invocation alone.
pub fn run_once(
    handler: &mut dyn PlatformHandler,
    def: &SolutionDef,
    spec: &SolutionSpecifier,
) -> Result<u64, HarnessError> {
    check_shape(handler, def)?;
    handler.provision_input(spec)?;

    let result = time_invocation(handler, def);
    let released = handler.release_input();
    let nanos = result?;
    released?;
    Ok(nanos)
}

fn time_invocation(handler: &mut dyn PlatformHandler, def: &SolutionDef) -> Result<u64, HarnessError> {
    handler.refresh_input()?;
    let input = handler.invocation_input();
    let timer = Timer::start();
    let outcome = invoke(def, input);
    let nanos = timer.stop();
    outcome.map(|()| nanos)
}

/// Run `def` `iterations` times with its output suppressed, collecting one
/// sample per iteration in invocation order.
pub fn run_many(
    handler: &mut dyn PlatformHandler,
    def: &SolutionDef,
    spec: &SolutionSpecifier,
    iterations: usize,
    progress: &mut dyn ProgressReporter,
) -> Result<SampleSet, HarnessError> {
    if iterations < MIN_ITERATIONS {
        return Err(HarnessError::InvalidIterationCount(iterations));
    }
    check_shape(handler, def)?;
    handler.provision_input(spec)?;

    progress.start(iterations);
    let result = collect_samples(handler, def, iterations, progress);
    progress.finish();

    let released = handler.release_input();
    let samples = result?;
    released?;
    Ok(samples)
}

fn collect_samples(
    handler: &mut dyn PlatformHandler,
    def: &SolutionDef,
    iterations: usize,
    progress: &mut dyn ProgressReporter,
) -> Result<SampleSet, HarnessError> {
    let mut samples = SampleSet::with_capacity(iterations.min(PREALLOCATED_SAMPLES));

    for iteration in 1..=iterations {
        handler.refresh_input()?;
        let input = handler.invocation_input();

        let suppression = OutputSuppression::engage().map_err(HarnessError::StreamRedirect)?;
        let timer = Timer::start();
        let outcome = invoke(def, input);
        let nanos = timer.stop();
        suppression.restore().map_err(HarnessError::StreamRedirect)?;

        outcome?;
        samples.push(nanos);
        tracing::trace!(iteration, nanos, "iteration complete");
        progress.iteration(iteration, nanos);
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{FileLinesPlatform, NoInputPlatform, StdinPlatform};
    use solvekit_core::{EntryPoint, Outcome};
    use std::io::Read;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Recorder {
        started: Option<usize>,
        iterations: Vec<usize>,
        finished: bool,
    }

    impl ProgressReporter for Recorder {
        fn start(&mut self, iterations: usize) {
            self.started = Some(iterations);
        }
        fn iteration(&mut self, iteration: usize, _nanos: u64) {
            self.iterations.push(iteration);
        }
        fn finish(&mut self) {
            self.finished = true;
        }
    }

    fn def(platform: &'static str, name: &'static str, entry: EntryPoint) -> SolutionDef {
        SolutionDef {
            platform,
            name,
            entry,
            file: file!(),
            line: line!(),
            module_path: module_path!(),
        }
    }

    fn spec(name: &str, test: i64) -> SolutionSpecifier {
        SolutionSpecifier::new(name, test).unwrap()
    }

    fn quiet() -> Outcome {
        Ok(())
    }

    #[test]
    fn rejects_fewer_than_three_iterations() {
        let _guard = crate::FD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let solution = def("ProjectEuler", "quiet", EntryPoint::NoInput(quiet));
        let mut handler = NoInputPlatform::new("ProjectEuler");

        for iterations in 0..MIN_ITERATIONS {
            let mut progress = Recorder::default();
            let err = run_many(&mut handler, &solution, &spec("quiet", 0), iterations, &mut progress)
                .unwrap_err();
            assert!(matches!(err, HarnessError::InvalidIterationCount(n) if n == iterations));
            // Rejected before any work began
            assert_eq!(progress.started, None);
        }

        let mut progress = Recorder::default();
        let samples = run_many(&mut handler, &solution, &spec("quiet", 0), 3, &mut progress).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(progress.started, Some(3));
        assert_eq!(progress.iterations, vec![1, 2, 3]);
        assert!(progress.finished);
    }

    #[test]
    fn huge_iteration_count_does_not_preallocate() {
        let _guard = crate::FD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        fn stop_early() -> Outcome {
            if CALLS.fetch_add(1, Ordering::SeqCst) == 4 {
                return Err("enough".into());
            }
            Ok(())
        }

        let solution = def("ProjectEuler", "stop_early", EntryPoint::NoInput(stop_early));
        let mut handler = NoInputPlatform::new("ProjectEuler");
        let mut progress = Recorder::default();

        let err = run_many(&mut handler, &solution, &spec("stop_early", 0), usize::MAX, &mut progress)
            .unwrap_err();
        assert!(matches!(err, HarnessError::SolutionExecution { .. }));
        assert_eq!(progress.started, Some(usize::MAX));
        assert_eq!(progress.iterations, vec![1, 2, 3, 4]);
    }

    #[test]
    fn passes_test_number_to_selector() {
        static SEEN: AtomicUsize = AtomicUsize::new(usize::MAX);
        fn selector(test: u8) -> Outcome {
            SEEN.store(test as usize, Ordering::SeqCst);
            Ok(())
        }

        let solution = def("LeetCode", "selector", EntryPoint::TestSelector(selector));
        let mut handler = NoInputPlatform::with_test_selector("LeetCode");
        run_once(&mut handler, &solution, &spec("selector", 6)).unwrap();
        assert_eq!(SEEN.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn shape_mismatch_is_reported_before_provisioning() {
        fn lines(_: &[String]) -> Outcome {
            Ok(())
        }
        let solution = def("SPOJ", "lines", EntryPoint::Lines(lines));
        // The input file does not exist; the shape check must fail first.
        let mut handler = StdinPlatform::new("SPOJ", "/nonexistent");

        let err = run_once(&mut handler, &solution, &spec("lines", 0)).unwrap_err();
        match err {
            HarnessError::EntryPointNotFound { detail, .. } => {
                assert_eq!(detail, "the solution takes input lines but SPOJ supplies no argument");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unregistered_solution_is_not_found() {
        let handler = NoInputPlatform::new("ProjectEuler");
        let err = resolve_solution(&handler, &spec("no_such_solution", 0)).unwrap_err();
        assert!(matches!(err, HarnessError::EntryPointNotFound { .. }));
    }

    #[test]
    fn failure_aborts_benchmark_and_restores_output() {
        let _guard = crate::FD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        fn flaky() -> Outcome {
            println!("noise that must stay suppressed");
            if CALLS.fetch_add(1, Ordering::SeqCst) == 1 {
                return Err("second call fails".into());
            }
            Ok(())
        }

        let solution = def("ProjectEuler", "flaky", EntryPoint::NoInput(flaky));
        let mut handler = NoInputPlatform::new("ProjectEuler");
        let mut progress = Recorder::default();

        let err = run_many(&mut handler, &solution, &spec("flaky", 0), 10, &mut progress).unwrap_err();
        match err {
            HarnessError::SolutionExecution { name, source } => {
                assert_eq!(name, "ProjectEuler.flaky");
                assert_eq!(source.to_string(), "second call fails");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(CALLS.load(Ordering::SeqCst), 2);
        assert_eq!(progress.iterations, vec![1]);
        assert!(progress.finished);
    }

    #[test]
    fn panic_is_reported_as_execution_failure() {
        let _guard = crate::FD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        fn explode() -> Outcome {
            panic!("boom");
        }

        let solution = def("ProjectEuler", "explode", EntryPoint::NoInput(explode));
        let mut handler = NoInputPlatform::new("ProjectEuler");
        let err = run_many(&mut handler, &solution, &spec("explode", 0), 3, &mut Recorder::default())
            .unwrap_err();
        match err {
            HarnessError::SolutionExecution { source, .. } => {
                assert_eq!(source.to_string(), "panicked: boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn lines_are_shared_across_iterations() {
        let _guard = crate::FD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        static TOTAL: AtomicUsize = AtomicUsize::new(0);
        fn count(lines: &[String]) -> Outcome {
            TOTAL.fetch_add(lines.len(), Ordering::SeqCst);
            Ok(())
        }

        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("AdventOfCode")).unwrap();
        std::fs::write(dir.path().join("AdventOfCode/i_count_1.txt"), "a\nb\nc\n").unwrap();

        let solution = def("AdventOfCode", "count", EntryPoint::Lines(count));
        let mut handler = FileLinesPlatform::new("AdventOfCode", dir.path());
        let samples =
            run_many(&mut handler, &solution, &spec("count", 1), 4, &mut Recorder::default()).unwrap();
        assert_eq!(samples.len(), 4);
        assert_eq!(TOTAL.load(Ordering::SeqCst), 12);
    }

    #[test]
    fn stdin_is_refreshed_every_iteration() {
        let _guard = crate::FD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        static FULL_READS: AtomicUsize = AtomicUsize::new(0);
        fn drain() -> Outcome {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            if text == "3\n1 2 3\n" {
                FULL_READS.fetch_add(1, Ordering::SeqCst);
            }
            Ok(())
        }

        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("Codeforces")).unwrap();
        std::fs::write(dir.path().join("Codeforces/i_drain_2.txt"), "3\n1 2 3\n").unwrap();

        let solution = def("Codeforces", "drain", EntryPoint::NoInput(drain));
        let mut handler = StdinPlatform::new("Codeforces", dir.path());
        run_many(&mut handler, &solution, &spec("drain", 2), 5, &mut Recorder::default()).unwrap();
        assert_eq!(FULL_READS.load(Ordering::SeqCst), 5);
    }
}
