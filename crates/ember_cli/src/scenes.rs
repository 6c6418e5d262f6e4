//! Built-in scenes: object tables, materials, and the camera parameters
//! each scene was framed with. Assembled once before rendering; immutable
//! afterwards.

use ember_math::Vec3;
use ember_renderer::{
    CheckerTexture, Color, Cuboid, DiffuseLight, HittableList, ImageTexture, Lambertian,
    NoiseTexture, RotateY, RotateZ, Sphere, XyRect, XzRect, YzRect,
};
use rand::RngCore;
use std::sync::Arc;

/// A scene plus the viewing parameters it was designed around.
pub struct SceneDescription {
    pub world: HittableList,
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub vfov: f32,
    pub aspect_ratio: f32,
    pub background: Color,
    pub samples_per_pixel: u32,
}

/// Checkered ground, a marble sphere, a wall rectangle, and an overhead
/// light panel.
pub fn rect_light(rng: &mut dyn RngCore) -> SceneDescription {
    let mut world = HittableList::new();

    let perltex = Arc::new(NoiseTexture::new(20.0, rng));
    let ball_material = Lambertian::textured(perltex);
    let difflight = DiffuseLight::new(Color::new(4.0, 4.0, 4.0));
    let white = Lambertian::new(Color::new(0.73, 0.73, 0.73));

    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        ball_material.clone(),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, 1.3, 0.0),
        1.3,
        ball_material,
    )));
    world.add(Box::new(XyRect::new(3.0, 5.0, 1.0, 3.0, -2.0, white)));
    world.add(Box::new(XzRect::new(0.0, 5.55, 0.0, 5.55, 5.55, difflight)));

    SceneDescription {
        world,
        look_from: Vec3::new(13.0, 2.0, 3.0),
        look_at: Vec3::ZERO,
        vfov: 20.0,
        aspect_ratio: 16.0 / 9.0,
        background: Color::ZERO,
        samples_per_pixel: 200,
    }
}

/// The empty Cornell cell: five walls and the ceiling light.
pub fn cornell_box() -> SceneDescription {
    let mut world = HittableList::new();

    let red = Lambertian::new(Color::new(0.65, 0.05, 0.05));
    let white = Arc::new(Lambertian::new(Color::new(0.73, 0.73, 0.73)));
    let green = Lambertian::new(Color::new(0.12, 0.45, 0.15));
    let light = DiffuseLight::new(Color::new(15.0, 15.0, 15.0));

    world.add(Box::new(YzRect::new(0.0, 555.0, 0.0, 555.0, 555.0, green)));
    world.add(Box::new(YzRect::new(0.0, 555.0, 0.0, 555.0, 0.0, red)));
    world.add(Box::new(XzRect::new(
        213.0, 343.0, 227.0, 332.0, 554.0, light,
    )));
    world.add(Box::new(XzRect::new(
        0.0,
        555.0,
        0.0,
        555.0,
        0.0,
        white.clone(),
    )));
    world.add(Box::new(XzRect::new(
        0.0,
        555.0,
        0.0,
        555.0,
        555.0,
        white.clone(),
    )));
    world.add(Box::new(XyRect::new(0.0, 555.0, 0.0, 555.0, 555.0, white)));

    SceneDescription {
        world,
        look_from: Vec3::new(278.0, 278.0, -800.0),
        look_at: Vec3::new(278.0, 278.0, 0.0),
        vfov: 40.0,
        aspect_ratio: 1.0,
        background: Color::ZERO,
        samples_per_pixel: 200,
    }
}

/// Cornell cell containing a red box.
pub fn cornell_box_cubes() -> SceneDescription {
    let mut scene = cornell_box();

    let red: Arc<dyn ember_renderer::Material> =
        Arc::new(Lambertian::new(Color::new(0.65, 0.05, 0.05)));
    scene.world.add(Box::new(Cuboid::new(
        Vec3::new(130.0, 0.0, 65.0),
        Vec3::new(295.0, 165.0, 230.0),
        red,
    )));

    scene
}

/// Marble ground with an overhead light and a red box tumbled 45 degrees
/// around two axes.
pub fn rotated_box(rng: &mut dyn RngCore) -> SceneDescription {
    let mut world = HittableList::new();

    let perltex = Arc::new(NoiseTexture::new(20.0, rng));
    let perlmat = Lambertian::textured(perltex);
    let light = DiffuseLight::new(Color::new(15.0, 15.0, 15.0));
    let red: Arc<dyn ember_renderer::Material> =
        Arc::new(Lambertian::new(Color::new(0.65, 0.05, 0.05)));

    world.add(Box::new(XzRect::new(
        -50.0, 50.0, -50.0, 50.0, 0.0, perlmat,
    )));
    world.add(Box::new(XzRect::new(-3.0, 3.0, -3.0, 3.0, 6.0, light)));

    let cube = Cuboid::new(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 2.0, 1.0), red);
    let cube = RotateY::new(Box::new(cube), 45.0);
    let cube = RotateZ::new(Box::new(cube), 45.0);
    world.add(Box::new(cube));

    SceneDescription {
        world,
        look_from: Vec3::new(13.0, 4.0, 3.0),
        look_at: Vec3::ZERO,
        vfov: 30.0,
        aspect_ratio: 1.0,
        background: Color::ZERO,
        samples_per_pixel: 100,
    }
}

/// Image-textured globe over a checkered ground. Exercises the image
/// texture path; with no earthmap.jpg on disk the globe renders in the
/// sentinel color instead of failing.
pub fn earth() -> SceneDescription {
    let mut world = HittableList::new();

    let checker = Arc::new(CheckerTexture::from_colors(
        Color::new(0.2, 0.3, 0.1),
        Color::new(0.9, 0.9, 0.9),
    ));
    let earthtex = Arc::new(ImageTexture::open("earthmap.jpg"));

    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        Lambertian::textured(checker),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, 2.0, 0.0),
        2.0,
        Lambertian::textured(earthtex),
    )));

    SceneDescription {
        world,
        look_from: Vec3::new(13.0, 2.0, 3.0),
        look_at: Vec3::ZERO,
        vfov: 20.0,
        aspect_ratio: 16.0 / 9.0,
        background: Color::new(0.7, 0.8, 1.0),
        samples_per_pixel: 100,
    }
}
