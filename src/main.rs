use cubeview::{CubeApp, SceneConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = CubeApp::new(SceneConfig::default())?;
    app.run()
}
