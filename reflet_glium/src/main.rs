use reflet_glium::{
    reflet::{Scene, SceneParams},
    DemoError, DemoParams, DemoWindow,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), DemoError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let params = DemoParams::default();
    let scene = Scene::<f32>::new(SceneParams::default());

    info!(
        title = %params.title,
        width = params.size[0],
        height = params.size[1],
        "opening window"
    );

    DemoWindow::from_params(&params)?.run(scene, params)
}
