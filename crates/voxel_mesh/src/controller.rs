//! Stride-driven re-extraction over one filled volume.
//!
//! The controller owns a [`FixedVolume`] that is filled exactly once and a
//! mutable sampling stride. Input-layer commands (recompute, stride up,
//! stride down) arrive through a channel and are drained on the caller's
//! tick; each one triggers a full re-extraction of the *same* volume at the
//! current stride and replaces the sink's mesh wholesale. There is no
//! incremental diffing — coarse strides are cheap enough to rebuild, and
//! fine strides are rebuilt deliberately when the user asks for detail.
//!
//! ```text
//!   Sender<SurfaceCommand> ──▶ queue ──▶ drain(sink)
//!                                          │ per command:
//!                                          │   adjust stride (floor 1)
//!                                          │   extract at stride
//!                                          │   write_surface(sink)
//!                                          ▼
//!                                     ExtractStats
//! ```

use std::marker::PhantomData;

use crossbeam_channel::{unbounded, Receiver, Sender};
use web_time::Instant;

use crate::constants::{DEFAULT_UNIT_SIZE, MIN_UNIT_SIZE};
use crate::error::ExtractResult;
use crate::extractor::SurfaceExtractor;
use crate::sink::{write_surface, MeshSink};
use crate::triangle::SurfaceVertex;
use crate::volume::FixedVolume;

/// Commands from the input layer driving re-extraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceCommand {
  /// Re-extract at the current stride.
  Rebuild,
  /// Coarsen: stride + 1, then re-extract.
  IncreaseStride,
  /// Refine: stride - 1 (floored at [`MIN_UNIT_SIZE`]), then re-extract.
  DecreaseStride,
}

/// Outcome of one re-extraction, for logging and debug overlays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtractStats {
  /// Stride the pass ran at.
  pub unit_size: usize,
  pub triangle_count: usize,
  /// Wall time of extract + sink streaming, in microseconds.
  pub duration_us: u64,
}

/// Owns one filled volume and re-extracts it on command.
pub struct SurfaceController<T, V> {
  volume: FixedVolume<T>,
  iso_level: T,
  unit_size: usize,
  sender: Sender<SurfaceCommand>,
  receiver: Receiver<SurfaceCommand>,
  _vertex: PhantomData<V>,
}

impl<T, V> SurfaceController<T, V>
where
  T: Copy + Into<f32>,
  V: SurfaceVertex,
{
  /// Take ownership of a filled volume. The stride starts at
  /// [`DEFAULT_UNIT_SIZE`].
  pub fn new(volume: FixedVolume<T>, iso_level: T) -> Self {
    let (sender, receiver) = unbounded();
    Self {
      volume,
      iso_level,
      unit_size: DEFAULT_UNIT_SIZE,
      sender,
      receiver,
      _vertex: PhantomData,
    }
  }

  /// Override the starting stride. Clamped to the floor.
  pub fn with_unit_size(mut self, unit_size: usize) -> Self {
    self.unit_size = unit_size.max(MIN_UNIT_SIZE);
    self
  }

  pub fn unit_size(&self) -> usize {
    self.unit_size
  }

  pub fn volume(&self) -> &FixedVolume<T> {
    &self.volume
  }

  /// Handle for the input layer to queue commands from any thread.
  pub fn command_sender(&self) -> Sender<SurfaceCommand> {
    self.sender.clone()
  }

  /// Apply one command: adjust the stride, then rebuild into `sink`.
  pub fn apply<S: MeshSink>(
    &mut self,
    command: SurfaceCommand,
    sink: &mut S,
  ) -> ExtractResult<ExtractStats> {
    match command {
      SurfaceCommand::Rebuild => {}
      SurfaceCommand::IncreaseStride => self.unit_size += 1,
      SurfaceCommand::DecreaseStride => {
        if self.unit_size > MIN_UNIT_SIZE {
          self.unit_size -= 1;
        }
      }
    }
    self.rebuild(sink)
  }

  /// Drain all queued commands in arrival order, rebuilding once per
  /// command. Returns the stats of each rebuild.
  pub fn drain<S: MeshSink>(&mut self, sink: &mut S) -> ExtractResult<Vec<ExtractStats>> {
    let mut stats = Vec::new();
    while let Ok(command) = self.receiver.try_recv() {
      stats.push(self.apply(command, sink)?);
    }
    Ok(stats)
  }

  /// Re-extract the whole volume at the current stride and replace the
  /// sink's mesh.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "controller::rebuild", fields(unit_size = self.unit_size))
  )]
  pub fn rebuild<S: MeshSink>(&mut self, sink: &mut S) -> ExtractResult<ExtractStats> {
    let start = Instant::now();

    let extractor: SurfaceExtractor<'_, T, V> = SurfaceExtractor::new(
      &self.volume,
      *self.volume.region(),
      self.iso_level,
      self.unit_size,
    )?;
    let surface = extractor.extract();
    write_surface(&surface, sink);

    let stats = ExtractStats {
      unit_size: self.unit_size,
      triangle_count: surface.triangle_count(),
      duration_us: start.elapsed().as_micros() as u64,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
      triangles = stats.triangle_count,
      us = stats.duration_us,
      "surface rebuilt"
    );

    Ok(stats)
  }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;
