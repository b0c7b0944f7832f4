//! The static field catalog.
//!
//! Every metric the exporter knows about is described exactly once in
//! [`FIELDS`]: its exposed name and help text, whether it is a counter or a
//! gauge, which report it is read from, and how it is located inside that
//! report. Both the extraction engine and the exposition layer walk this
//! table; nothing mutates it at runtime.

use regex::Regex;

use std::sync::OnceLock;

mod fields;

pub use fields::FIELDS;

/// The diagnostic report a field is read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Report {
    /// `ovs-appctl dpif-netdev/pmd-stats-show`
    PmdStats,
    /// `ovs-appctl coverage/show`
    Coverage,
}

impl Report {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PmdStats => "pmd_stats",
            Self::Coverage => "coverage",
        }
    }
}

/// Where the numeric token sits on a line once the label has matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// `label: 1234`
    Colon,
    /// `label   0.0/sec ...   total: 1234`
    Total,
    /// `label: 731072761249336 (99.80%)`, the bracketed percentage
    Percent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricKind {
    Counter,
    Gauge,
}

impl MetricKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Counter => "counter",
            Self::Gauge => "gauge",
        }
    }
}

/// Identifies one tracked metric. Discriminants are positions in
/// [`FIELDS`] and in a [`Snapshot`](crate::snapshot::Snapshot).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    // PMD stats
    MissWithSuccessUpcall,
    MissWithFailedUpcall,
    AvgSubtableLookupsMegaflow,
    ProcessingCycles,
    IdleCycles,
    // drop reasons
    UpcallDrops,
    UpcallDropsLockError,
    RxDropsInvalidPacket,
    DatapathDropMeter,
    DatapathDropUserspaceActionError,
    DatapathDropTunnelPushError,
    DatapathDropTunnelPopError,
    DatapathDropRecircError,
    DatapathDropInvalidPort,
    DatapathDropInvalidTnlPort,
    DatapathDropSampleError,
    DatapathDropNshDecapError,
    DropActionOfPipeline,
    DropActionBridgeNotFound,
    DropActionRecursionTooDeep,
    DropActionTooManyResubmit,
    DropActionStackTooDeep,
    DropActionNoRecirculationContext,
    DropActionRecirculationConflict,
    DropActionTooManyMplsLabels,
    DropActionInvalidTunnelMetadata,
    DropActionUnsupportedPacketType,
    DropActionCongestion,
    DropActionForwardingDisabled,
    // newer drop reasons
    NetdevVxlanTsoDrops,
    NetdevGeneveTsoDrops,
    NetdevPushHeaderDrops,
    NetdevSoftSegDrops,
    DatapathDropTunnelTsoRecirc,
    DatapathDropInvalidBond,
    DatapathDropHwMissRecover,
    // DOCA offload
    OvsDocaNoMark,
    OvsDocaInvalidClassifyPort,
    DocaQueueEmpty,
    DocaQueueNoneProcessed,
    DocaResizeBlock,
    DocaPipeResize,
    DocaPipeResizeOver10Ms,
}

impl Field {
    pub const COUNT: usize = 43;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn descriptor(self) -> &'static FieldDescriptor {
        &FIELDS[self.index()]
    }
}

/// Static description of a single field.
pub struct FieldDescriptor {
    pub field: Field,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: MetricKind,
    pub report: Report,
    /// Literal label as printed by `ovs-appctl`. Spaces match any run of
    /// whitespace.
    pub label: &'static str,
    pub anchor: Anchor,
    pattern: OnceLock<Regex>,
}

impl FieldDescriptor {
    const fn new(
        field: Field,
        name: &'static str,
        description: &'static str,
        kind: MetricKind,
        report: Report,
        label: &'static str,
        anchor: Anchor,
    ) -> Self {
        Self {
            field,
            name,
            description,
            kind,
            report,
            label,
            anchor,
            pattern: OnceLock::new(),
        }
    }

    /// Matches the label at the start of a line, after optional spaces or
    /// tabs. The label must end on a word boundary so that
    /// `doca_pipe_resize` does not match `doca_pipe_resize_over_10_ms`.
    pub fn pattern(&self) -> &Regex {
        self.pattern.get_or_init(|| {
            let words: Vec<String> = self.label.split_whitespace().map(regex::escape).collect();
            let pattern = format!(r"^[ \t]*{}\b", words.join(r"\s+"));

            Regex::new(&pattern).expect("label pattern must compile")
        })
    }

    /// Byte offset just past the label if `line` starts with it.
    pub fn match_label(&self, line: &str) -> Option<usize> {
        self.pattern().find(line).map(|m| m.end())
    }
}

/// Builds the label pattern of every field up front so a bad label fails
/// at startup instead of on the first scrape.
pub fn compile_patterns(fields: &[FieldDescriptor]) {
    for descriptor in fields {
        descriptor.pattern();
    }
}
