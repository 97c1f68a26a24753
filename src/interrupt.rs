//! Interrupt signal listener

// external crates
use log::debug;

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

#[cfg(windows)]
use tokio::signal::windows::{ctrl_c, CtrlC};

/// Listener for the interrupt signal
///
/// The handler is installed as soon as the listener is registered, so an
/// interrupt that arrives before anything awaits it is still delivered to
/// [recv()](Interrupt::recv) rather than killing the process.
#[derive(Debug)]
pub struct Interrupt {
    #[cfg(unix)]
    inner: Signal,
    #[cfg(windows)]
    inner: CtrlC,
}

impl Interrupt {
    /// Install the handler and start listening
    pub fn register() -> std::io::Result<Self> {
        #[cfg(unix)]
        let inner = signal(SignalKind::interrupt())?;
        #[cfg(windows)]
        let inner = ctrl_c()?;

        debug!("Listening for interrupts");
        Ok(Self { inner })
    }

    /// Wait for the next interrupt
    pub async fn recv(&mut self) {
        self.inner.recv().await;
    }
}
