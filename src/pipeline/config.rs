// Serializable, comparable, explicit defaults.
// Paths are not part of the config: they are supplied per run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PipelineConfig {
    /// Line partitions counted in parallel. `1` is sequential, `0` means
    /// one per available CPU.
    pub partitions: usize,
}

impl PipelineConfig {
    pub fn v0() -> Self {
        Self { partitions: 1 }
    }

    pub fn with_partitions(partitions: usize) -> Self {
        Self { partitions }
    }

    pub fn effective_partitions(&self) -> usize {
        match self.partitions {
            0 => num_cpus::get().max(1),
            n => n,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::v0()
    }
}
