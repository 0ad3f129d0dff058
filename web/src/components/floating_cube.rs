use leptos::prelude::*;

use crate::motion::{self, Transition};

pub const DEFAULT_CUBE_DELAY: f64 = 0.0;
pub const DEFAULT_CUBE_SIZE: u32 = 140;
pub const DEFAULT_CUBE_GRADIENT: &str = "from-fuchsia-500 to-indigo-500";

/// Attributes of one cube: the animated wrapper and the tilted face.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeStyle {
    pub wrapper_style: String,
    pub face_class: String,
    pub face_style: String,
}

impl CubeStyle {
    pub fn new(delay: f64, size: u32, gradient: &str) -> Self {
        let transition = Transition::looping(motion::CUBE_FLOAT_SECONDS).delayed(delay);
        Self {
            wrapper_style: format!(
                "perspective: 1200px; animation: {};",
                motion::cube_float().animation(&transition)
            ),
            face_class: format!(
                "bg-gradient-to-br {} rounded-[28px] shadow-2xl shadow-indigo-900/20",
                gradient
            ),
            face_style: format!(
                "width: {size}px; height: {size}px; transform-style: preserve-3d; \
                 transform: rotateX(55deg) rotateZ(35deg); \
                 box-shadow: 0 30px 80px rgba(79, 70, 229, .18);"
            ),
        }
    }
}

impl Default for CubeStyle {
    fn default() -> Self {
        Self::new(DEFAULT_CUBE_DELAY, DEFAULT_CUBE_SIZE, DEFAULT_CUBE_GRADIENT)
    }
}

/// Decorative cube that spins and floats for as long as it is mounted.
#[component]
pub fn FloatingCube(
    #[prop(default = DEFAULT_CUBE_DELAY)] delay: f64,
    #[prop(default = DEFAULT_CUBE_SIZE)] size: u32,
    #[prop(into, default = DEFAULT_CUBE_GRADIENT.to_string())] color: String,
) -> impl IntoView {
    let CubeStyle {
        wrapper_style,
        face_class,
        face_style,
    } = CubeStyle::new(delay, size, &color);

    view! {
        <div class="relative" style=wrapper_style>
            <div class=face_class style=face_style>
                // pseudo 3D faces
                <div class="absolute inset-0 rounded-[28px] bg-white/5 backdrop-blur-sm border border-white/10"></div>
                <div
                    class="absolute -right-3 top-6 h-2/3 w-2 rounded-full bg-white/20 rotate-12"
                    style="transform: translateZ(24px);"
                ></div>
                <div class="absolute left-6 -bottom-3 h-2 w-2/3 rounded-full bg-black/10"></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fuchsia_cube() {
        let style = CubeStyle::default();
        assert!(style.face_style.starts_with("width: 140px; height: 140px;"));
        assert!(style.face_class.contains("from-fuchsia-500 to-indigo-500"));
        assert!(style
            .wrapper_style
            .contains("cube-float 18s linear 0s infinite both"));
    }

    #[test]
    fn hero_cubes_reflect_their_parameters() {
        let cases = [
            (0.0, 140, "from-fuchsia-500 to-indigo-500", "0s"),
            (4.0, 180, "from-emerald-400 to-cyan-500", "4s"),
            (8.0, 120, "from-rose-500 to-amber-400", "8s"),
        ];
        for (delay, size, gradient, delay_css) in cases {
            let style = CubeStyle::new(delay, size, gradient);
            assert!(style.face_style.contains(&format!("width: {size}px")));
            assert!(style.face_style.contains(&format!("height: {size}px")));
            assert!(style.face_class.contains(gradient));
            assert!(style
                .wrapper_style
                .contains(&format!("linear {delay_css} infinite")));
        }
    }

    #[test]
    fn renders_size_and_gradient() {
        let html = view! { <FloatingCube delay=4.0 size=180 color="from-emerald-400 to-cyan-500" /> }
            .to_html();
        assert!(html.contains("width: 180px; height: 180px;"));
        assert!(html.contains("from-emerald-400 to-cyan-500"));
        assert!(html.contains("cube-float 18s linear 4s infinite both"));
    }

    #[test]
    fn renders_defaults_when_unspecified() {
        let html = view! { <FloatingCube /> }.to_html();
        assert!(html.contains("width: 140px; height: 140px;"));
        assert!(html.contains("from-fuchsia-500 to-indigo-500"));
        assert!(html.contains("linear 0s infinite"));
    }
}
