use super::helpers::{self, DEPTH_FORMAT};

/// Multisampled color and depth attachments sized to the surface.
///
/// The scene is drawn into `msaa_view` and resolved into the swapchain
/// texture; `depth_view` shares the same sample count.
pub(crate) struct RenderTargets {
    pub(crate) msaa_tex: wgpu::Texture,
    pub(crate) msaa_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    format: wgpu::TextureFormat,
    sample_count: u32,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        sample_count: u32,
        width: u32,
        height: u32,
    ) -> Self {
        let (msaa_tex, msaa_view) = helpers::create_attachment_texture(
            device,
            "msaa_color",
            width,
            height,
            format,
            sample_count,
        );
        let (depth_tex, depth_view) = helpers::create_attachment_texture(
            device,
            "depth",
            width,
            height,
            DEPTH_FORMAT,
            sample_count,
        );
        Self {
            msaa_tex,
            msaa_view,
            depth_tex,
            depth_view,
            format,
            sample_count,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, self.format, self.sample_count, width, height);
    }

    pub(crate) fn size(&self) -> (u32, u32) {
        let s = self.msaa_tex.size();
        debug_assert_eq!(s, self.depth_tex.size());
        (s.width, s.height)
    }
}
