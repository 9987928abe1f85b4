//! The write driver: generate N records, submit each to a sink, finalize.

use std::time::{Duration, Instant};

use tracing::{debug, info};
use writebench_core::{RowSink, SinkError};
use writebench_generator::RowGenerator;

/// Metrics from one benchmark run.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of records submitted to the sink.
    pub rows_written: u64,
    /// Wall-clock time for the whole run including finalize.
    pub total_duration: Duration,
    /// Time spent deriving records.
    pub generation_duration: Duration,
    /// Time spent inside the sink's submit call.
    pub submit_duration: Duration,
}

impl WriteMetrics {
    /// Rows per second over the whole run.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Drives record generation and submission against a row sink.
///
/// The driver owns the loop index; records are handed to the sink one at a
/// time and never retained. Any sink error aborts the run immediately: the
/// sink is dropped without being finalized and the output is left in an
/// unspecified state.
pub struct WriteDriver {
    count: u64,
    progress: Option<Box<dyn FnMut(u64)>>,
}

impl WriteDriver {
    /// Driver for `count` records.
    pub fn new(count: u64) -> Self {
        Self {
            count,
            progress: None,
        }
    }

    /// Report progress percentages through `callback`.
    ///
    /// Invoked at roughly 1% granularity, after the submission that crosses
    /// each checkpoint. Counts below 100 emit nothing (the checkpoint divisor
    /// would be zero). The callback is observational only and cannot fail the
    /// run.
    pub fn with_progress(mut self, callback: impl FnMut(u64) + 'static) -> Self {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Submit `count` generated records to `sink`, then finalize it.
    pub fn run<S: RowSink>(&mut self, mut sink: S) -> Result<WriteMetrics, SinkError> {
        let start = Instant::now();
        let mut metrics = WriteMetrics::default();

        let mut generator = RowGenerator::new();
        let checkpoint = self.count / 100;

        for i in 0..self.count {
            let gen_start = Instant::now();
            let record = generator.next_record();
            metrics.generation_duration += gen_start.elapsed();

            let submit_start = Instant::now();
            sink.submit(&record)?;
            metrics.submit_duration += submit_start.elapsed();

            metrics.rows_written += 1;

            if checkpoint != 0 && i % checkpoint == 0 {
                if let Some(progress) = self.progress.as_mut() {
                    progress(i * 100 / self.count);
                }
            }
        }

        debug!("submitted {} rows, finalizing sink", metrics.rows_written);
        sink.finalize()?;

        metrics.total_duration = start.elapsed();
        info!(
            "write complete: {} rows in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use writebench_core::StudentRecord;

    #[derive(Debug, Default)]
    struct SinkState {
        records: Vec<StudentRecord>,
        finalized: bool,
    }

    /// In-memory sink with injectable failures.
    #[derive(Clone, Default)]
    struct MemSink {
        state: Rc<RefCell<SinkState>>,
        fail_at: Option<u64>,
        fail_finalize: bool,
    }

    impl RowSink for MemSink {
        fn submit(&mut self, record: &StudentRecord) -> Result<(), SinkError> {
            let mut state = self.state.borrow_mut();
            if Some(state.records.len() as u64) == self.fail_at {
                return Err(SinkError::Io(std::io::Error::other("disk full")));
            }
            state.records.push(record.clone());
            Ok(())
        }

        fn finalize(self) -> Result<(), SinkError> {
            if self.fail_finalize {
                return Err(SinkError::Io(std::io::Error::other("footer write failed")));
            }
            self.state.borrow_mut().finalized = true;
            Ok(())
        }
    }

    #[test]
    fn test_submits_all_records_in_order() {
        let sink = MemSink::default();
        let state = sink.state.clone();

        let metrics = WriteDriver::new(250).run(sink).unwrap();

        assert_eq!(metrics.rows_written, 250);
        let state = state.borrow();
        assert!(state.finalized);
        assert_eq!(state.records.len(), 250);
        for (i, record) in state.records.iter().enumerate() {
            assert_eq!(record.id, i as i64);
        }
    }

    #[test]
    fn test_zero_records() {
        let sink = MemSink::default();
        let state = sink.state.clone();
        let percents = Rc::new(RefCell::new(Vec::new()));
        let seen = percents.clone();

        let metrics = WriteDriver::new(0)
            .with_progress(move |p| seen.borrow_mut().push(p))
            .run(sink)
            .unwrap();

        assert_eq!(metrics.rows_written, 0);
        assert!(state.borrow().finalized);
        assert!(state.borrow().records.is_empty());
        assert!(percents.borrow().is_empty());
    }

    #[test]
    fn test_single_record() {
        let sink = MemSink::default();
        let state = sink.state.clone();
        let percents = Rc::new(RefCell::new(Vec::new()));
        let seen = percents.clone();

        WriteDriver::new(1)
            .with_progress(move |p| seen.borrow_mut().push(p))
            .run(sink)
            .unwrap();

        let state = state.borrow();
        assert_eq!(state.records.len(), 1);
        let record = &state.records[0];
        assert_eq!(record.age, 18);
        assert_eq!(record.id, 0);
        assert_eq!(record.weight, 60.0);
        assert!(record.sex);
        // count / 100 == 0, so no progress output
        assert!(percents.borrow().is_empty());
    }

    #[test]
    fn test_progress_checkpoints() {
        let sink = MemSink::default();
        let percents = Rc::new(RefCell::new(Vec::new()));
        let seen = percents.clone();

        WriteDriver::new(300)
            .with_progress(move |p| seen.borrow_mut().push(p))
            .run(sink)
            .unwrap();

        let percents = percents.borrow();
        // Checkpoints at every third index: i = 0, 3, .., 297
        assert_eq!(percents.len(), 100);
        assert_eq!(percents.first(), Some(&0));
        assert_eq!(percents.last(), Some(&99));
        assert!(percents.contains(&33));
        assert!(percents.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_no_progress_below_one_hundred() {
        let sink = MemSink::default();
        let percents = Rc::new(RefCell::new(Vec::new()));
        let seen = percents.clone();

        WriteDriver::new(99)
            .with_progress(move |p| seen.borrow_mut().push(p))
            .run(sink)
            .unwrap();

        assert!(percents.borrow().is_empty());
    }

    #[test]
    fn test_submit_failure_aborts_without_finalize() {
        let sink = MemSink {
            fail_at: Some(3),
            ..Default::default()
        };
        let state = sink.state.clone();

        let result = WriteDriver::new(10).run(sink);

        assert!(matches!(result, Err(SinkError::Io(_))));
        let state = state.borrow();
        assert!(!state.finalized);
        // Records before the failing submission were delivered in order
        assert_eq!(state.records.len(), 3);
        for (i, record) in state.records.iter().enumerate() {
            assert_eq!(record.id, i as i64);
        }
    }

    #[test]
    fn test_finalize_failure_propagates() {
        let sink = MemSink {
            fail_finalize: true,
            ..Default::default()
        };
        let state = sink.state.clone();

        let result = WriteDriver::new(5).run(sink);

        assert!(matches!(result, Err(SinkError::Io(_))));
        let state = state.borrow();
        assert!(!state.finalized);
        assert_eq!(state.records.len(), 5);
    }
}
