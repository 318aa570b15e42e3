//! Headless front end: composes the demo's model/view/projection matrices
//! and logs what would be uploaded as uniforms.

use anyhow::{Context, Result, bail};
use corelib::scene::{self, SceneObject};
use corelib::{Matrix4, Transform, parse_vec3};

const DEFAULT_ASPECT: f32 = 1280.0 / 720.0;

fn parse_vec3_arg(prefix: &str) -> Result<Option<[f32; 3]>> {
    // Accept: --translate=x,y,z | --scale=s
    for arg in std::env::args() {
        if let Some(val) = arg.strip_prefix(prefix) {
            let v = parse_vec3(val).with_context(|| format!("bad value for {prefix}"))?;
            return Ok(Some(v));
        }
    }
    Ok(None)
}

fn parse_aspect_arg() -> Result<f32> {
    // --aspect=W/H or --size=WxH
    for arg in std::env::args() {
        let pair = if let Some(v) = arg.strip_prefix("--aspect=") {
            v.split_once('/')
        } else if let Some(v) = arg.strip_prefix("--size=") {
            v.split_once('x').or_else(|| v.split_once('X'))
        } else {
            continue;
        };
        let (w, h) = pair.with_context(|| format!("expected two numbers in '{arg}'"))?;
        let w: f32 = w.trim().parse().with_context(|| format!("bad width in '{arg}'"))?;
        let h: f32 = h.trim().parse().with_context(|| format!("bad height in '{arg}'"))?;
        if w <= 0.0 || h <= 0.0 {
            bail!("aspect components must be positive, got {w}x{h}");
        }
        return Ok(w / h);
    }
    Ok(DEFAULT_ASPECT)
}

fn objects() -> Result<Vec<SceneObject>> {
    let translate = parse_vec3_arg("--translate=")?;
    let scale = parse_vec3_arg("--scale=")?;
    if translate.is_none() && scale.is_none() {
        return Ok(scene::demo_objects().to_vec());
    }
    let t = Transform::from_ts(translate.unwrap_or([0.0; 3]), scale.unwrap_or([1.0; 3]));
    Ok(vec![SceneObject::new("custom", t)])
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let aspect = parse_aspect_arg()?;
    let objects = objects()?;
    log::info!("Composing {} object(s), aspect={:.4}", objects.len(), aspect);

    // Fixed camera five units back, OpenGL clip space.
    let view = Matrix4::translate(&Matrix4::IDENTITY, [0.0, 0.0, -5.0]);
    let projection: Matrix4 =
        glam::Mat4::perspective_rh_gl(45f32.to_radians(), aspect, 0.1, 100.0).into();
    log::debug!("view:\n{view}");
    log::debug!("projection:\n{projection}");

    for obj in &objects {
        let model = obj.model();
        let mvp = obj.mvp(view, projection);
        log::info!("{} model:\n{}", obj.name, model);
        log::info!("{} mvp ({} bytes):\n{}", obj.name, mvp.as_bytes().len(), mvp);
    }

    Ok(())
}
