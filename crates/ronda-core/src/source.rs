//! Trait seams for external data collaborators.
//!
//! The engine itself is pure; everything that touches the network lives
//! behind these traits. A failed fetch for one symbol must never abort a
//! batch: callers log the failure and substitute
//! [`RawFundamentals::missing`] so the table keeps its row.

use crate::error::Result;
use crate::fundamentals::RawFundamentals;
use std::future::Future;

/// Horizon of a forward EPS growth estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthHorizon {
    /// Estimated EPS growth for the next fiscal year.
    #[default]
    NextYear,
    /// Estimated annualized EPS growth over the next five years.
    NextFiveYears,
}

/// Supplies raw fundamentals for a ticker symbol.
///
/// Implementations may return partially-populated records; absent fields
/// stay `None`. Implemented by `ronda-yahoo`.
pub trait FundamentalsSource: Send + Sync {
    /// Fetch the raw fundamental fields for one symbol.
    fn fetch(&self, symbol: &str) -> impl Future<Output = Result<RawFundamentals>> + Send;
}

/// Supplies a forward EPS growth percent from a non-API source.
///
/// Returns `Ok(None)` when the source has no estimate for the symbol.
/// Implemented by `ronda-finviz`.
pub trait GrowthSource: Send + Sync {
    /// Fetch the EPS growth estimate (percent, 0-100 scale) for one symbol.
    fn eps_growth(
        &self,
        symbol: &str,
        horizon: GrowthHorizon,
    ) -> impl Future<Output = Result<Option<f64>>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubSource;

    impl FundamentalsSource for StubSource {
        async fn fetch(&self, symbol: &str) -> Result<RawFundamentals> {
            Ok(RawFundamentals {
                price: Some(10.0),
                ..RawFundamentals::missing(symbol)
            })
        }
    }

    impl GrowthSource for StubSource {
        async fn eps_growth(&self, _symbol: &str, _horizon: GrowthHorizon) -> Result<Option<f64>> {
            Ok(Some(12.5))
        }
    }

    #[test]
    fn test_stub_source() {
        let source = StubSource;
        let record = futures_executor(source.fetch("AAPL")).unwrap();
        assert_eq!(record.symbol, "AAPL");
        assert_eq!(record.price, Some(10.0));

        let growth = futures_executor(source.eps_growth("AAPL", GrowthHorizon::NextYear)).unwrap();
        assert_eq!(growth, Some(12.5));
    }

    // Minimal block_on for stub futures that never actually suspend.
    fn futures_executor<F: Future>(future: F) -> F::Output {
        use std::pin::pin;
        use std::task::{Context, Poll, Waker};

        let waker = Waker::noop();
        let mut cx = Context::from_waker(waker);
        let mut future = pin!(future);
        match future.as_mut().poll(&mut cx) {
            Poll::Ready(output) => output,
            Poll::Pending => unreachable!("stub futures are immediately ready"),
        }
    }
}
