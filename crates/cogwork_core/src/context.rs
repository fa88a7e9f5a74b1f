use std::sync::Arc;

use anyhow::Context as _;
use thiserror::Error;

/// Container for the wgpu objects shared by every part of the clock.
///
/// `Instance` and `Adapter` stay unwrapped because they never cross module
/// boundaries after startup, while `Device` and `Queue` are handed to every
/// buffer/pipeline/draw call, so they are `Arc`-wrapped for cheap cloning.
///
/// Every GPU operation in this workspace takes the device/queue explicitly
/// from here; there is no implicitly bound "current" context anywhere.
pub struct RenderContext {
    pub instance: wgpu::Instance,
    pub adapter: wgpu::Adapter,
    pub device: Arc<wgpu::Device>,
    pub queue: Arc<wgpu::Queue>,
}

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("no suitable GPU adapter available")]
    AdapterUnavailable,
    #[error("device request failed: {0}")]
    DeviceRequest(String),
}

impl RenderContext {
    /// Creates a headless `RenderContext` (no surface). Useful for tests and
    /// offline mesh uploads.
    pub async fn new() -> anyhow::Result<Self> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        Self::new_with_instance(instance, None).await
    }

    /// Creates a `RenderContext` from an existing `Instance`, optionally
    /// constrained to an adapter compatible with `compatible_surface`.
    ///
    /// Use this path when rendering to a real window — it avoids selecting
    /// an adapter that cannot present to it.
    pub async fn new_with_instance(
        instance: wgpu::Instance,
        compatible_surface: Option<&wgpu::Surface<'_>>,
    ) -> anyhow::Result<Self> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface,
                force_fallback_adapter: false,
            })
            .await
            .context(ContextError::AdapterUnavailable)?;

        log::info!(
            "selected adapter: {} ({:?})",
            adapter.get_info().name,
            adapter.get_info().backend
        );

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Cogwork Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    ..Default::default()
                },
                None,
            )
            .await
            .map_err(|e| ContextError::DeviceRequest(e.to_string()))?;

        Ok(Self {
            instance,
            adapter,
            device: Arc::new(device),
            queue: Arc::new(queue),
        })
    }
}
