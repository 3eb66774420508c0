pub mod esbuild;

use std::future::Future;

use twinpack_common::BuildTask;

/// Carries out a single [`BuildTask`]. The bundling itself always happens
/// behind this trait.
pub trait BuildBackend: Send + Sync {
  fn build(&self, task: &BuildTask) -> impl Future<Output = anyhow::Result<()>> + Send;
}
