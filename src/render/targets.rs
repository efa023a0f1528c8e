use super::helpers;
use wgpu;

pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Depth buffer matching the swapchain size.
///
/// The plane writes depth so splat points behind it are hidden; splats only
/// test against it.
pub(crate) struct RenderTargets {
    // held only to keep the view's texture alive
    _depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (depth_tex, depth_view) =
            helpers::create_depth_texture(device, "depth_tex", width, height, DEPTH_FORMAT);
        Self {
            _depth_tex: depth_tex,
            depth_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self._depth_tex, self.depth_view) =
            helpers::create_depth_texture(device, "depth_tex", width, height, DEPTH_FORMAT);
    }
}
