use glcache::render::cache::pointers::PointerKind;
use glcache::render::gl::{self, GLpointer};
use glcache::{CacheConfig, GlCall, GlContext, RecordingDevice};

fn init() -> GlContext<RecordingDevice> {
    let _ = env_logger::builder().is_test(true).try_init();
    GlContext::new(RecordingDevice::new(), CacheConfig::default())
}

fn one_frame(ctx: &mut GlContext<RecordingDevice>, verts: &[f32], uvs: &[f32]) {
    ctx.matrix_mode(gl::MODELVIEW);
    ctx.enable(gl::BLEND);
    ctx.blend_func(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
    ctx.enable(gl::TEXTURE_2D);
    ctx.bind_texture(gl::TEXTURE_2D, 7);
    ctx.enable_client_state(gl::TEXTURE_COORD_ARRAY);
    ctx.color4f(1.0, 0.5, 0.5, 1.0);
    ctx.vertex_pointer(2, gl::FLOAT, 0, verts.as_ptr() as GLpointer);
    ctx.tex_coord_pointer(2, gl::FLOAT, 0, uvs.as_ptr() as GLpointer);
    ctx.pixel_storei(gl::UNPACK_ALIGNMENT, 1);
}

#[test]
fn matrix_mode_scenario() {
    let mut ctx = init();
    ctx.matrix_mode(gl::PROJECTION);
    ctx.matrix_mode(gl::PROJECTION);
    ctx.matrix_mode(gl::MODELVIEW);
    assert_eq!(
        ctx.device().calls(),
        &[GlCall::MatrixMode(gl::PROJECTION), GlCall::MatrixMode(gl::MODELVIEW)]
    );
}

#[test]
fn delete_bound_texture_scenario() {
    let mut ctx = init();
    ctx.bind_texture(gl::TEXTURE_2D, 5);
    assert_eq!(ctx.cache().textures().get(gl::TEXTURE_2D), Some(5));
    ctx.delete_textures(&[5]);
    assert_eq!(ctx.cache().textures().get(gl::TEXTURE_2D), Some(0));
    ctx.bind_texture(gl::TEXTURE_2D, 0);
    assert_eq!(
        ctx.device().calls(),
        &[GlCall::BindTexture(gl::TEXTURE_2D, 5), GlCall::DeleteTextures(vec![5])]
    );
}

#[test]
fn replaying_a_frame_forwards_nothing() {
    let mut ctx = init();
    let verts = [0.0f32; 8];
    let uvs = [0.0f32; 8];
    one_frame(&mut ctx, &verts, &uvs);
    assert_eq!(ctx.device().len(), 10);

    ctx.device_mut().clear();
    one_frame(&mut ctx, &verts, &uvs);
    assert!(ctx.device().is_empty());
}

#[test]
fn same_layout_new_address_resubmits() {
    let mut ctx = init();
    let a = [0.0f32; 8];
    let b = [0.0f32; 8];
    ctx.color_pointer(4, gl::FLOAT, 0, a.as_ptr() as GLpointer);
    ctx.color_pointer(4, gl::FLOAT, 0, a.as_ptr() as GLpointer);
    ctx.color_pointer(4, gl::FLOAT, 0, b.as_ptr() as GLpointer);
    assert_eq!(ctx.device().len(), 2);
    let color = ctx.cache().pointers().get(PointerKind::Color);
    assert_eq!(color.map(|s| s.pointer), Some(b.as_ptr() as GLpointer));
}

#[test]
fn unmanaged_state_is_never_cached() {
    let mut ctx = init();
    for _ in 0..3 {
        ctx.enable(gl::LIGHTING);
        ctx.enable_client_state(gl::NORMAL_ARRAY);
        ctx.pixel_storei(gl::PACK_ALIGNMENT, 2);
    }
    assert_eq!(ctx.device().len(), 9);
}

#[test]
fn buffer_offsets_resubmit_after_array_buffer_change() {
    let mut ctx = init();
    ctx.bind_buffer(gl::ARRAY_BUFFER, 1);
    ctx.vertex_pointer(3, gl::FLOAT, 12, core::ptr::null());
    ctx.bind_buffer(gl::ARRAY_BUFFER, 2);
    ctx.vertex_pointer(3, gl::FLOAT, 12, core::ptr::null());
    assert_eq!(
        ctx.device().calls(),
        &[
            GlCall::BindBuffer(gl::ARRAY_BUFFER, 1),
            GlCall::VertexPointer(3, gl::FLOAT, 12, 0),
            GlCall::BindBuffer(gl::ARRAY_BUFFER, 2),
            GlCall::VertexPointer(3, gl::FLOAT, 12, 0),
        ]
    );
}

#[test]
fn size_zero_pointer_after_buffer_bind_reaches_device() {
    let mut ctx = init();
    ctx.bind_buffer(gl::ARRAY_BUFFER, 1);
    ctx.device_mut().clear();
    ctx.vertex_pointer(0, gl::FLOAT, 0, core::ptr::null());
    assert_eq!(ctx.device().calls(), &[GlCall::VertexPointer(0, gl::FLOAT, 0, 0)]);
}
