use std::sync::mpsc;

use sort_test_model::{Batch, SortedBatch};
use tracing::{debug, warn};

use crate::completion::{CompletionError, WaitGroup};

/// Sorts every array on its own thread and collects them as they finish.
///
/// The output holds the same arrays as the input, each sorted, in completion
/// order. There is no bound on the number of threads: a batch of `n` arrays
/// starts `n` units.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConcurrentSorter;

impl crate::Sorter for ConcurrentSorter {
    type Error = CompletionError;

    const NAME: &'static str = "concurrent";

    fn sort(&self, batch: Batch) -> Result<SortedBatch, Self::Error> {
        fan_in(batch, crate::sort_array)
    }
}

/// Runs `work` over every array on its own unit and collects the arrays in
/// completion order.
fn fan_in(batch: Batch, work: fn(&mut [i64])) -> Result<SortedBatch, CompletionError> {
    let expected = batch.len();
    let (sender, receiver) = mpsc::channel();
    let pending = WaitGroup::new();

    let mut spawn_error = None;
    let mut spawned = 0;
    for (unit, array) in batch.into_iter().enumerate() {
        pending.add(1);
        match spawn_unit(unit, array, work, sender.clone(), pending.clone()) {
            Ok(()) => spawned += 1,
            Err(error) => {
                // The unit never started.
                pending.clone().done();
                spawn_error = Some(error);
                break;
            }
        }
    }
    debug!(spawned, expected, "sort units started");

    // Closes the channel once every unit reported.
    let closer = {
        let pending = pending.clone();
        std::thread::Builder::new()
            .name("sort-closer".into())
            .spawn(move || {
                pending.wait();
                drop(sender);
            })
    };
    if let Err(error) = &closer {
        warn!(%error, "cannot spawn closer, waiting inline");
        pending.wait();
    }

    let mut sorted = Vec::with_capacity(spawned);
    for array in receiver {
        sorted.push(array);
    }

    if let Ok(closer) = closer {
        let _ = closer.join();
    }

    if let Some(source) = spawn_error {
        return Err(CompletionError::Spawn {
            spawned,
            expected,
            source,
        });
    }
    if sorted.len() != expected {
        return Err(CompletionError::MissingResults {
            expected,
            received: sorted.len(),
        });
    }
    Ok(sorted)
}

/// Starts one unit of work: run `work` on `array`, publish it, report done.
///
/// The done report is tied to a scope guard, so a unit that unwinds still
/// counts down the barrier.
fn spawn_unit(
    unit: usize,
    mut array: Vec<i64>,
    work: fn(&mut [i64]),
    sender: mpsc::Sender<Vec<i64>>,
    done: WaitGroup,
) -> std::io::Result<()> {
    std::thread::Builder::new()
        .name(format!("sort-unit-{unit}"))
        .spawn(move || {
            let _done = scopeguard::guard(done, WaitGroup::done);
            work(&mut array);
            let _ = sender.send(array);
        })?;
    Ok(())
}
