//! Error handling.

use heapless::spsc::Queue;

/// All recoverable hardware fault types.
///
/// Configuration invariant violations (misordered thresholds) are not
/// represented here: they panic, since they signal a programming error the
/// host cannot recover from.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Error {
    SwitchGpioWriteError,
    MotionGpioReadError,
    AnalogReadError,
}

impl Error {
    /// Enqueue the error for later reporting, dropping the oldest entry
    /// when the queue is full.
    pub fn log<const N: usize>(&self, queue: &mut Queue<Self, N>) {
        match queue.enqueue(*self) {
            Ok(()) => { /* Enqueued */ }
            Err(e) => {
                // Queue full, drop the oldest value and try again
                queue.dequeue();
                queue.enqueue(e).ok();
            }
        }
    }
}

impl ufmt::uDisplay for Error {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        f.write_str(match self {
            Self::SwitchGpioWriteError => "Switch GPIO write error",
            Self::MotionGpioReadError => "Motion sensor GPIO read error",
            Self::AnalogReadError => "Analog read error",
        })
    }
}
