use std::f32::consts::PI;

use kiss3d::camera::Camera;
use kiss3d::event::{Action, Key, MouseButton, WindowEvent};
use kiss3d::resource::ShaderUniform;
use kiss3d::window::Canvas;
use nalgebra::{Isometry3, Matrix4, Perspective3, Point3, Vector2, Vector3};

const KEY_CAMERA_MOVE_UP: Key = Key::W;
const KEY_CAMERA_MOVE_DOWN: Key = Key::S;
const KEY_CAMERA_MOVE_LEFT: Key = Key::A;
const KEY_CAMERA_MOVE_RIGHT: Key = Key::D;
const KEY_CAMERA_ZOOM_IN: Key = Key::Equals;
const KEY_CAMERA_ZOOM_OUT: Key = Key::Minus;

const KEY_ANGLE_STEP: f32 = 0.1;
const KEY_ZOOM_STEP: f32 = 1.2;

// A close cousin of ArcBall. Click-and-drag adjusts pitch and yaw, scrolling
// zooms, and a handful of keys nudge the same controls. Inputs move target
// values; the live position eases toward the targets a little every tick, so
// the motion coasts to a stop instead of snapping.
//
// The camera always points at the origin and uses the y-axis as up, matching
// the plane the orbits sweep.
pub struct OrbitCamera {
    // -- live position, eased toward the targets --
    theta: f32,  // azimuthal angle
    phi: f32,    // polar angle
    radius: f32, // distance from origin
    // -- where the inputs want it --
    target_theta: f32,
    target_phi: f32,
    target_radius: f32,
    // -- perspective --
    width: u32,
    height: u32,
    fovy: f32,
    // -- other --
    last_cursor_pos: Vector2<f32>,
    // -- knobs to fiddle with --
    theta_step: f32,
    phi_step: f32,
    scroll_ratio: f32,
    phi_limit: f32,
    radius_limits: (f32, f32),
    damping_rate: f32,
    clip_planes: (f32, f32),
}

impl OrbitCamera {
    pub fn new(radius: f32) -> Self {
        OrbitCamera {
            theta: 0.0,
            phi: PI / 3.0,
            radius,
            target_theta: 0.0,
            target_phi: PI / 3.0,
            target_radius: radius,
            width: 800,
            height: 600,
            fovy: PI / 4.0,
            last_cursor_pos: Vector2::zeros(),
            theta_step: 0.005,
            phi_step: 0.005,
            scroll_ratio: 1.5,
            phi_limit: 0.001,
            radius_limits: (20.0, 900.0),
            damping_rate: 8.0,
            clip_planes: (1.0, 4000.0),
        }
    }

    fn projection(&self) -> Perspective3<f32> {
        Perspective3::new(
            self.width as f32 / self.height as f32,
            self.fovy,
            self.clip_planes.0,
            self.clip_planes.1,
        )
    }

    fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection().into_inner()
    }

    fn view_matrix(&self) -> Matrix4<f32> {
        self.view_transform().to_homogeneous()
    }

    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn target_distance(&self) -> f32 {
        self.target_radius
    }

    /// Live (theta, phi), radians.
    pub fn angles(&self) -> (f32, f32) {
        (self.theta, self.phi)
    }

    pub fn target_angles(&self) -> (f32, f32) {
        (self.target_theta, self.target_phi)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Steer the rotation targets. The polar target is kept off the poles so
    /// the view direction never degenerates with the up vector.
    pub fn rotate(&mut self, dtheta: f32, dphi: f32) {
        self.target_theta += dtheta;
        self.target_phi = nalgebra::clamp(
            self.target_phi + dphi,
            self.phi_limit,
            PI - self.phi_limit,
        );
    }

    pub fn zoom(&mut self, factor: f32) {
        self.target_radius = nalgebra::clamp(
            self.target_radius * factor,
            self.radius_limits.0,
            self.radius_limits.1,
        );
    }

    /// Ease the live coordinates toward the targets. The blend factor comes
    /// from the elapsed time, so the glide feels the same at any frame rate.
    pub fn update_damping(&mut self, dt: f32) {
        let blend = 1.0 - (-self.damping_rate * dt).exp();
        self.theta += blend * (self.target_theta - self.theta);
        self.phi += blend * (self.target_phi - self.phi);
        self.radius += blend * (self.target_radius - self.radius);
    }
}

impl Camera for OrbitCamera {
    fn handle_event(&mut self, canvas: &Canvas, event: &WindowEvent) {
        match *event {
            WindowEvent::CursorPos(x, y, _) => {
                let curr_pos = Vector2::new(x as f32, y as f32);

                if canvas.get_mouse_button(MouseButton::Button1) == Action::Press {
                    // Rotate the opposite direction as the mouse moves (drag right == camera glides
                    // left)
                    let dpos = curr_pos - self.last_cursor_pos;
                    self.rotate(-dpos.x * self.theta_step, -dpos.y * self.phi_step);
                }

                self.last_cursor_pos = curr_pos;
            }
            WindowEvent::Scroll(_, off, _) => {
                // scroll up == zoom in
                if off < 0.0 {
                    self.zoom(self.scroll_ratio);
                } else if off > 0.0 {
                    self.zoom(self.scroll_ratio.recip())
                }
            }
            WindowEvent::Key(KEY_CAMERA_MOVE_UP, Action::Press, _) => {
                self.rotate(0.0, -KEY_ANGLE_STEP)
            }
            WindowEvent::Key(KEY_CAMERA_MOVE_DOWN, Action::Press, _) => {
                self.rotate(0.0, KEY_ANGLE_STEP)
            }
            WindowEvent::Key(KEY_CAMERA_MOVE_LEFT, Action::Press, _) => {
                self.rotate(-KEY_ANGLE_STEP, 0.0)
            }
            WindowEvent::Key(KEY_CAMERA_MOVE_RIGHT, Action::Press, _) => {
                self.rotate(KEY_ANGLE_STEP, 0.0)
            }
            WindowEvent::Key(KEY_CAMERA_ZOOM_IN, Action::Press, _) => {
                self.zoom(KEY_ZOOM_STEP.recip())
            }
            WindowEvent::Key(KEY_CAMERA_ZOOM_OUT, Action::Press, _) => self.zoom(KEY_ZOOM_STEP),
            // Window sizing is the viewport adapter's job, not ours.
            _ => {}
        }
    }

    fn eye(&self) -> Point3<f32> {
        Point3::new(
            self.radius * self.theta.cos() * self.phi.sin(),
            self.radius * self.phi.cos(),
            self.radius * self.theta.sin() * self.phi.sin(),
        )
    }

    fn view_transform(&self) -> Isometry3<f32> {
        Isometry3::look_at_rh(&self.eye(), &Point3::origin(), &Vector3::y())
    }

    fn transformation(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    fn inverse_transformation(&self) -> Matrix4<f32> {
        self.transformation().try_inverse().unwrap()
    }

    fn clip_planes(&self) -> (f32, f32) {
        (self.projection().znear(), self.projection().zfar())
    }

    fn update(&mut self, _canvas: &Canvas) {}

    fn upload(
        &self,
        _: usize,
        proj: &mut ShaderUniform<Matrix4<f32>>,
        view: &mut ShaderUniform<Matrix4<f32>>,
    ) {
        proj.upload(&self.projection_matrix());
        view.upload(&self.view_matrix());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_eye_orbits_the_origin_with_y_up() {
        let camera = OrbitCamera::new(100.0);
        let eye = camera.eye();
        assert_relative_eq!(eye.coords.norm(), 100.0, max_relative = 1e-5);
        // Starts above the orbital plane, at zero azimuth.
        assert!(eye.y > 0.0);
        assert_abs_diff_eq!(eye.z, 0.0);
    }

    #[test]
    fn test_rotate_moves_the_targets_not_the_eye() {
        let mut camera = OrbitCamera::new(100.0);
        let before = camera.angles();
        camera.rotate(0.3, 0.1);

        assert_relative_eq!(camera.angles().0, before.0);
        assert_relative_eq!(camera.angles().1, before.1);
        assert_relative_eq!(camera.target_angles().0, before.0 + 0.3);
        assert_relative_eq!(camera.target_angles().1, before.1 + 0.1);
    }

    #[test]
    fn test_polar_target_stays_off_the_poles() {
        let mut camera = OrbitCamera::new(100.0);
        camera.rotate(0.0, -10.0);
        assert!(camera.target_angles().1 > 0.0);
        camera.rotate(0.0, 20.0);
        assert!(camera.target_angles().1 < PI);
    }

    #[test]
    fn test_zoom_target_respects_the_distance_limits() {
        let mut camera = OrbitCamera::new(100.0);
        for _ in 0..50 {
            camera.zoom(0.5);
        }
        assert_relative_eq!(camera.target_distance(), 20.0);
        for _ in 0..50 {
            camera.zoom(2.0);
        }
        assert_relative_eq!(camera.target_distance(), 900.0);
    }

    #[test]
    fn test_damping_glides_to_the_targets() {
        let mut camera = OrbitCamera::new(100.0);
        camera.rotate(0.5, -0.2);
        camera.zoom(2.0);

        // One tick gets partway there.
        camera.update_damping(1.0 / 60.0);
        let (theta, _) = camera.angles();
        assert!(theta > 0.0 && theta < 0.5);

        // Ten simulated seconds all but close the gap.
        for _ in 0..600 {
            camera.update_damping(1.0 / 60.0);
        }
        assert_relative_eq!(camera.angles().0, camera.target_angles().0, epsilon = 1e-4);
        assert_relative_eq!(camera.angles().1, camera.target_angles().1, epsilon = 1e-4);
        assert_relative_eq!(camera.distance(), camera.target_distance(), epsilon = 1e-2);
    }

    #[test]
    fn test_zero_dt_leaves_the_camera_alone() {
        let mut camera = OrbitCamera::new(100.0);
        camera.rotate(0.5, 0.1);
        camera.update_damping(0.0);
        assert_relative_eq!(camera.angles().0, 0.0);
        assert_relative_eq!(camera.distance(), 100.0);
    }

    #[test]
    fn test_aspect_follows_dimensions() {
        let mut camera = OrbitCamera::new(100.0);
        camera.set_dimensions(1920, 1080);
        assert_relative_eq!(camera.aspect(), 1920.0 / 1080.0);
        assert_eq!(camera.width(), 1920);
        assert_eq!(camera.height(), 1080);
    }
}
