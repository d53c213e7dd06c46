// Allocation accounting for the comparison runs. jemalloc is used
// as the global allocator so its statistics can be read back.
use anyhow::{anyhow, Result};
use tikv_jemalloc_ctl::{epoch, stats};
use tikv_jemallocator::Jemalloc;

#[global_allocator]
static ALLOC: Jemalloc = Jemalloc;

// Bytes currently allocated by the application. The statistics are
// cached by jemalloc, so the epoch has to be advanced first.
pub fn allocated() -> Result<usize> {
    epoch::advance().map_err(|e| anyhow!("Could not refresh allocator statistics: {}", e))?;
    stats::allocated::read().map_err(|e| anyhow!("Could not read allocator statistics: {}", e))
}

// Measures how much more memory is held at some point compared
// to when the meter was started.
pub struct AllocationMeter {
    baseline: usize,
}

impl AllocationMeter {
    pub fn start() -> Result<Self> {
        Ok(AllocationMeter {
            baseline: allocated()?,
        })
    }

    pub fn delta(&self) -> Result<usize> {
        Ok(allocated()?.saturating_sub(self.baseline))
    }
}
