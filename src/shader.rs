use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glium::program::{ProgramCreationError, ShaderType};
use glium::{Display, Program};
use glutin::surface::WindowSurface;
use thiserror::Error;

/// Pipeline stage a shader source file feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

/// Everything that can go wrong between a pair of source paths and a linked
/// program. Each failure point reports independently with the driver or OS
/// diagnostic attached.
#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("failed to read {stage} shader source {}: {source}", path.display())]
    ReadSource {
        stage: ShaderStage,
        path: PathBuf,
        source: io::Error,
    },
    #[error("{stage} shader failed to compile:\n{log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("shader program failed to link:\n{log}")]
    Link { log: String },
    #[error("shader program creation failed: {0}")]
    Create(String),
}

/// Vertex and fragment source text, read fully before any GL work.
///
/// Loading is plain file I/O, separate from compilation so it stays usable
/// (and testable) without a live GL context.
#[derive(Debug)]
pub struct ShaderSource {
    vertex: String,
    fragment: String,
}

impl ShaderSource {
    pub fn load(
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self, ShaderError> {
        Ok(Self {
            vertex: read_stage(ShaderStage::Vertex, vertex_path.as_ref())?,
            fragment: read_stage(ShaderStage::Fragment, fragment_path.as_ref())?,
        })
    }

    pub fn from_strings(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    pub fn vertex(&self) -> &str {
        &self.vertex
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

fn read_stage(stage: ShaderStage, path: &Path) -> Result<String, ShaderError> {
    fs::read_to_string(path).map_err(|source| ShaderError::ReadSource {
        stage,
        path: path.to_owned(),
        source,
    })
}

/// A compiled and linked GPU program.
///
/// Source text is consumed at construction and discarded; the per-stage
/// compiled units are released by the GL layer once linking succeeds. Uniform
/// names are resolved per draw call, never cached.
pub struct ShaderProgram {
    program: Program,
}

impl ShaderProgram {
    pub fn from_files(
        display: &Display<WindowSurface>,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self, ShaderError> {
        let source = ShaderSource::load(vertex_path, fragment_path)?;
        Self::from_source(display, &source)
    }

    pub fn from_source(
        display: &Display<WindowSurface>,
        source: &ShaderSource,
    ) -> Result<Self, ShaderError> {
        Program::from_source(display, &source.vertex, &source.fragment, None)
            .map(|program| Self { program })
            .map_err(classify)
    }

    /// The linked program, handed to each draw call. glium binds the program
    /// as part of the draw, so this is the whole activation story.
    pub fn program(&self) -> &Program {
        &self.program
    }
}

fn classify(err: ProgramCreationError) -> ShaderError {
    match err {
        ProgramCreationError::CompilationError(log, ShaderType::Vertex) => ShaderError::Compile {
            stage: ShaderStage::Vertex,
            log,
        },
        ProgramCreationError::CompilationError(log, _) => ShaderError::Compile {
            stage: ShaderStage::Fragment,
            log,
        },
        ProgramCreationError::LinkingError(log) => ShaderError::Link { log },
        other => ShaderError::Create(other.to_string()),
    }
}

const FALLBACK_VERTEX: &str = "
    #version 140

    in vec3 position;

    void main() {
        gl_Position = vec4(position, 1.0);
    }
";

const FALLBACK_FRAGMENT: &str = "
    #version 140

    out vec4 f_color;

    void main() {
        f_color = vec4(1.0, 0.0, 1.0, 1.0);
    }
";

/// Load a program from disk, substituting a solid magenta built-in after a
/// logged failure so the scene keeps rendering, visibly wrong, instead of
/// aborting.
pub fn load_or_fallback(
    display: &Display<WindowSurface>,
    vertex_path: impl AsRef<Path>,
    fragment_path: impl AsRef<Path>,
) -> ShaderProgram {
    match ShaderProgram::from_files(display, &vertex_path, &fragment_path) {
        Ok(program) => program,
        Err(err) => {
            log::error!("{err}");
            let source = ShaderSource::from_strings(FALLBACK_VERTEX, FALLBACK_FRAGMENT);
            ShaderProgram::from_source(display, &source)
                .expect("built-in fallback shader compiles")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn load_reads_both_stages() {
        let dir = tempfile::tempdir().unwrap();
        let vert = write_file(&dir, "plain.vert", "void main() {}");
        let frag = write_file(&dir, "plain.frag", "void main() { discard; }");

        let source = ShaderSource::load(&vert, &frag).unwrap();
        assert_eq!(source.vertex(), "void main() {}");
        assert_eq!(source.fragment(), "void main() { discard; }");
    }

    #[test]
    fn missing_vertex_file_reports_vertex_stage() {
        let dir = tempfile::tempdir().unwrap();
        let frag = write_file(&dir, "plain.frag", "void main() {}");

        let err = ShaderSource::load(dir.path().join("nope.vert"), &frag).unwrap_err();
        match err {
            ShaderError::ReadSource { stage, ref path, .. } => {
                assert_eq!(stage, ShaderStage::Vertex);
                assert!(path.ends_with("nope.vert"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_fragment_file_reports_fragment_stage() {
        let dir = tempfile::tempdir().unwrap();
        let vert = write_file(&dir, "plain.vert", "void main() {}");

        let err = ShaderSource::load(&vert, dir.path().join("nope.frag")).unwrap_err();
        assert!(matches!(
            err,
            ShaderError::ReadSource {
                stage: ShaderStage::Fragment,
                ..
            }
        ));
    }

    #[test]
    fn read_errors_name_the_stage_and_path() {
        let err = ShaderSource::load("/no/such/file.vert", "/no/such/file.frag").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("vertex shader source"));
        assert!(message.contains("/no/such/file.vert"));
    }

    #[test]
    fn compile_and_link_errors_are_tagged() {
        let compile = ShaderError::Compile {
            stage: ShaderStage::Fragment,
            log: "0:1(1): error: syntax error".into(),
        };
        assert!(compile.to_string().contains("fragment shader failed to compile"));

        let link = ShaderError::Link {
            log: "undefined reference".into(),
        };
        assert!(link.to_string().contains("failed to link"));
    }
}
