use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use arbmatch::domain::{OpinionPosition, PolyPosition};
use arbmatch::error::Error;
use arbmatch::port::{OpinionPositionSource, PolyPositionSource};

/// Canned response for a mock source.
pub enum Canned<T> {
    Positions(Vec<T>),
    Fail(Error),
}

/// Mock source that answers every call with the same canned response.
pub struct MockSource<T> {
    canned: Mutex<Option<Canned<T>>>,
    calls: AtomicUsize,
    wallets: Mutex<Vec<String>>,
}

impl<T: Clone> MockSource<T> {
    pub fn returning(positions: Vec<T>) -> Self {
        Self::new(Canned::Positions(positions))
    }

    pub fn failing(err: Error) -> Self {
        Self::new(Canned::Fail(err))
    }

    fn new(canned: Canned<T>) -> Self {
        Self {
            canned: Mutex::new(Some(canned)),
            calls: AtomicUsize::new(0),
            wallets: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn wallets(&self) -> Vec<String> {
        self.wallets.lock().unwrap().clone()
    }

    fn answer(&self, wallet: &str) -> Result<Vec<T>, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.wallets.lock().unwrap().push(wallet.to_string());

        // Errors are not Clone, so a failing source fails once.
        let mut canned = self.canned.lock().unwrap();
        match canned.take() {
            Some(Canned::Positions(positions)) => {
                let answer = positions.clone();
                *canned = Some(Canned::Positions(positions));
                Ok(answer)
            }
            Some(Canned::Fail(err)) => Err(err),
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl PolyPositionSource for MockSource<PolyPosition> {
    async fn fetch_positions(&self, wallet: &str) -> Result<Vec<PolyPosition>, Error> {
        self.answer(wallet)
    }
}

#[async_trait]
impl OpinionPositionSource for MockSource<OpinionPosition> {
    async fn fetch_positions(&self, wallet: &str) -> Result<Vec<OpinionPosition>, Error> {
        self.answer(wallet)
    }
}
