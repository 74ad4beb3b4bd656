//! The render pass boundary

use quill_paint::ISize;

use crate::command::Command;
use crate::host_buffer::HostBuffer;

/// A render pass implemented by the GPU backend.
///
/// Contents append at most one [`Command`] per render call. Implementations
/// may block inside `add_command` (for example while waiting on frames in
/// flight); callers hold no locks across it.
pub trait RenderPass {
    fn render_target_size(&self) -> ISize;

    fn sample_count(&self) -> u32 {
        1
    }

    /// Per-frame storage for uniforms and vertices
    fn transients_buffer(&mut self) -> &mut HostBuffer;

    /// Returns `false` if the pass cannot accept further commands.
    fn add_command(&mut self, command: Command) -> bool;
}

/// A pass that keeps every command in memory.
///
/// Useful for headless rendering, replay inspection and tests.
#[derive(Debug, Default)]
pub struct RecordingPass {
    size: ISize,
    sample_count: u32,
    transients: HostBuffer,
    commands: Vec<Command>,
    capacity: Option<usize>,
}

impl RecordingPass {
    pub fn new(size: ISize) -> Self {
        Self {
            size,
            sample_count: 1,
            ..Default::default()
        }
    }

    pub fn with_sample_count(mut self, sample_count: u32) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Reject commands once `capacity` have been accepted.
    pub fn with_capacity_limit(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub fn transients(&self) -> &HostBuffer {
        &self.transients
    }
}

impl RenderPass for RecordingPass {
    fn render_target_size(&self) -> ISize {
        self.size
    }

    fn sample_count(&self) -> u32 {
        self.sample_count
    }

    fn transients_buffer(&mut self) -> &mut HostBuffer {
        &mut self.transients
    }

    fn add_command(&mut self, command: Command) -> bool {
        if self
            .capacity
            .is_some_and(|capacity| self.commands.len() >= capacity)
        {
            return false;
        }
        self.commands.push(command);
        true
    }
}
