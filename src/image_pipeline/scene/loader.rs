use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::scene::types::Scene;

pub trait SceneLoader {
    fn load_scene(&self, data: &[u8]) -> Result<Scene>;
}
