use metrics::Counter;
use metrics_derive::Metrics;

#[derive(Metrics, Clone)]
#[metrics(scope = "stgcodec")]
pub struct SlotMetrics {
    /// The number of slots read through structured storage
    #[metrics(describe = "The number of slots read through structured storage")]
    pub(crate) slots_read: Counter,
    /// The number of slots written through structured storage
    #[metrics(describe = "The number of slots written through structured storage")]
    pub(crate) slots_written: Counter,
    /// The number of reads and writes where the slot was empty
    #[metrics(describe = "The number of reads and writes where the slot was empty")]
    pub(crate) slots_elided: Counter,
    /// The number of non-empty slots that failed to decode
    #[metrics(describe = "The number of non-empty slots that failed to decode")]
    pub(crate) decode_failures: Counter,
}
