//! LaTeX documents and the [`Printer`] trait.
//!
//! A [`Document`] owns the text of one `.tex` file: a preamble generated from
//! its document class and registered colors, a body made of a header, content
//! and footer, and the closing `\end{document}`. Every printer in this crate
//! wraps a `Document` and exposes it through [`Printer`], so any printer can be
//! saved, compiled, displayed, or embedded into another document.
//!
//! # Output files
//!
//! For a document created with the path `figures/graph`:
//!
//! | File                      | Written by                      |
//! |---------------------------|---------------------------------|
//! | `figures/graph.tex`       | [`Document::save`]              |
//! | `figures/graph_body.tex`  | [`Document::save_body`]         |
//! | `figures/graph.pdf`       | [`Document::compile`] (via the compiler) |

use std::{
    fmt,
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, error, info, trace};

use texcanvas_core::color::{ColorRegistry, HexColor};

use crate::{error::TexError, toolchain::Toolchain};

const BODY_SUFFIX: &str = "_body";

/// Fraction of the line width shared among the subfigures of one row.
const SUBFIGURE_ROW_WIDTH: f64 = 0.95;

/// The LaTeX document class written into the preamble.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DocumentClass {
    /// A full page document, used to collect figures.
    #[default]
    Article,
    /// A document cropped to its content, used for single drawings.
    Standalone,
}

impl fmt::Display for DocumentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Article => f.write_str("article"),
            Self::Standalone => f.write_str("standalone"),
        }
    }
}

/// Where a figure's caption goes relative to its content.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CaptionPlacement {
    #[default]
    Above,
    Below,
}

#[derive(Debug, Clone, Default)]
struct Body {
    header: String,
    content: String,
    footer: String,
}

/// A LaTeX document under construction.
///
/// # Examples
///
/// ```
/// use texcanvas::{Document, DocumentClass};
///
/// let mut doc = Document::new("out/report", DocumentClass::Article);
/// doc.add_comment("generated");
/// doc.add_input("table");
///
/// assert_eq!(doc.name(), "report");
/// assert_eq!(doc.body_text(), "% generated\n\\input{table}\n\n");
/// assert!(doc.full_text().starts_with("\\documentclass{article}"));
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    directory: PathBuf,
    name: String,
    class: DocumentClass,
    body: Body,
    caption: Option<String>,
    colors: ColorRegistry,
    subfigure_count: usize,
    toolchain: Toolchain,
}

impl Document {
    /// Creates an empty document for `path`.
    ///
    /// The last path component is the document name (a trailing `.tex` is
    /// dropped) and the rest is the output directory, which defaults to the
    /// current directory.
    pub fn new(path: impl AsRef<Path>, class: DocumentClass) -> Self {
        let (directory, name) = split_path(path.as_ref());
        debug!(directory:? = directory, name = name; "Creating document");
        Self {
            directory,
            name,
            class,
            body: Body::default(),
            caption: None,
            colors: ColorRegistry::new(),
            subfigure_count: 0,
            toolchain: Toolchain::default(),
        }
    }

    /// Sets the compiler and viewer for this document (builder style).
    pub fn with_toolchain(mut self, toolchain: Toolchain) -> Self {
        self.toolchain = toolchain;
        self
    }

    pub fn set_toolchain(&mut self, toolchain: Toolchain) {
        self.toolchain = toolchain;
    }

    pub fn toolchain(&self) -> &Toolchain {
        &self.toolchain
    }

    /// Returns the document name, without directory or extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the output directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn class(&self) -> DocumentClass {
        self.class
    }

    /// Returns `<directory>/<name>.tex`.
    pub fn tex_path(&self) -> PathBuf {
        self.directory.join(format!("{}.tex", self.name))
    }

    /// Returns `<directory>/<name>_body.tex`.
    pub fn body_path(&self) -> PathBuf {
        self.directory.join(format!("{}{BODY_SUFFIX}.tex", self.name))
    }

    /// Returns `<directory>/<name>.pdf`.
    pub fn pdf_path(&self) -> PathBuf {
        self.directory.join(format!("{}.pdf", self.name))
    }

    // ---------------------------------------------------------------------
    // Text
    // ---------------------------------------------------------------------

    /// Returns the preamble, including color definitions and `\begin{document}`.
    pub fn document_header(&self) -> String {
        format!(
            "\\documentclass{{{}}}\n\n\
             \\usepackage[table]{{xcolor}}\n\
             \\usepackage{{tikz,pgfplots,amsmath,fullpage,rotating}}\n\
             \\usetikzlibrary{{shapes}}\n\
             \\pgfplotsset{{compat=1.15}}\n\n\
             {}\n\n\n\n\
             \\begin{{document}}\n\n",
            self.class,
            self.colors.definitions()
        )
    }

    pub fn document_footer() -> &'static str {
        "\\end{document}"
    }

    /// Returns the body: header, content and footer.
    pub fn body_text(&self) -> String {
        let Body {
            header,
            content,
            footer,
        } = &self.body;
        format!("{header}{content}{footer}")
    }

    /// Returns the complete `.tex` file contents.
    pub fn full_text(&self) -> String {
        format!(
            "{}{}{}",
            self.document_header(),
            self.body_text(),
            Self::document_footer()
        )
    }

    /// Returns the body content between the body header and footer.
    pub fn content(&self) -> &str {
        &self.body.content
    }

    pub(crate) fn set_body_frame(&mut self, header: String, footer: String) {
        self.body.header = header;
        self.body.footer = footer;
    }

    pub(crate) fn set_content(&mut self, content: String) {
        self.body.content = content;
    }

    // ---------------------------------------------------------------------
    // Captions and figures
    // ---------------------------------------------------------------------

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Sets the caption used when this document is embedded as a figure.
    ///
    /// The caption is also recorded in the body as a comment.
    pub fn set_caption(&mut self, caption: &str) {
        self.caption = Some(caption.to_string());
        self.add_comment(caption);
    }

    /// Returns `\caption{...}` for this document's caption, if it has one.
    pub fn caption_markup(&self) -> Option<String> {
        self.caption
            .as_ref()
            .map(|caption| format!("\\caption{{{caption}}}\n"))
    }

    pub fn figure_header() -> &'static str {
        "\\begin{figure}[ht]\n\\centering\n\n"
    }

    pub fn figure_footer() -> &'static str {
        "\\end{figure}\n"
    }

    /// Returns the opening of a subfigure taking `ratio_of_line_width` of the line.
    pub fn subfigure_header(ratio_of_line_width: f64) -> String {
        format!(
            "\\begin{{minipage}}{{{}\\linewidth}}",
            texcanvas_core::number::fixed(ratio_of_line_width)
        )
    }

    pub fn subfigure_footer() -> &'static str {
        "\\end{minipage}"
    }

    // ---------------------------------------------------------------------
    // Composition
    // ---------------------------------------------------------------------

    /// Embeds another printer's document into this one.
    ///
    /// With `precompile`, the other document is compiled and its PDF is
    /// included with `\includegraphics`. Otherwise its body is written to
    /// `<name>_body.tex` and included with `\input`. The other document's
    /// colors are added to this document's registry.
    ///
    /// # Errors
    ///
    /// Returns the error of the save or compile step. Nothing is added to this
    /// document in that case.
    pub fn add_to_document<P>(&mut self, other: &P, precompile: bool) -> Result<(), TexError>
    where
        P: Printer + ?Sized,
    {
        let embedding = self.embedding(other.document(), precompile)?;
        self.body.content.push_str(&embedding);
        Ok(())
    }

    /// Embeds another printer's document as a figure.
    ///
    /// The caption of the other document, if set, is placed above or below
    /// the content.
    pub fn add_to_document_as_figure<P>(
        &mut self,
        other: &P,
        precompile: bool,
        placement: CaptionPlacement,
    ) -> Result<(), TexError>
    where
        P: Printer + ?Sized,
    {
        let other = other.document();
        let embedding = self.embedding(other, precompile)?;
        let caption = other.caption_markup().unwrap_or_default();

        let mut figure = Self::figure_header().to_string();
        if placement == CaptionPlacement::Above {
            figure.push_str(&caption);
        }
        figure.push_str(&embedding);
        if placement == CaptionPlacement::Below {
            figure.push_str(&caption);
        }
        figure.push_str(Self::figure_footer());

        self.body.content.push_str(&figure);
        Ok(())
    }

    /// Embeds another printer's document as one of `columns` subfigures per row.
    ///
    /// Subfigures are separated by `\hfill`; after every `columns`-th subfigure
    /// a blank line starts a new row.
    ///
    /// # Errors
    ///
    /// Returns [`TexError::InvalidArgument`] if `columns` is zero, and the
    /// errors of [`Self::add_to_document`].
    pub fn add_to_document_as_subfigure<P>(
        &mut self,
        other: &P,
        columns: usize,
        caption: Option<&str>,
        precompile: bool,
    ) -> Result<(), TexError>
    where
        P: Printer + ?Sized,
    {
        if columns == 0 {
            return Err(TexError::InvalidArgument(
                "subfigure column count must be at least 1".to_string(),
            ));
        }

        let embedding = self.embedding(other.document(), precompile)?;

        let mut subfigure = Self::subfigure_header(SUBFIGURE_ROW_WIDTH / columns as f64);
        subfigure.push_str(&embedding);
        if let Some(caption) = caption {
            subfigure.push_str(&format!("\\caption{{{caption}}}\n"));
        }
        subfigure.push_str(Self::subfigure_footer());

        self.subfigure_count += 1;
        if self.subfigure_count % columns == 0 {
            subfigure.push_str("\n\n");
        } else {
            subfigure.push_str("\n\\hfill\n");
        }

        self.body.content.push_str(&subfigure);
        Ok(())
    }

    /// Writes or compiles `other`, merges its colors and returns the include line.
    fn embedding(&mut self, other: &Document, precompile: bool) -> Result<String, TexError> {
        let embedding = if precompile {
            other.compile()?;
            graphic_markup(&format!("{}.pdf", other.include_stem()))
        } else {
            other.save_body()?;
            input_markup(&format!("{}{BODY_SUFFIX}", other.include_stem()))
        };

        self.colors.merge(&other.colors);
        debug!(
            document = self.name,
            embedded = other.name,
            precompile;
            "Embedded document"
        );
        Ok(embedding)
    }

    /// The name other documents use to refer to this one's files.
    ///
    /// Documents in the current directory are referenced by bare name.
    fn include_stem(&self) -> String {
        if self.directory == Path::new(".") {
            self.name.clone()
        } else {
            self.directory.join(&self.name).display().to_string()
        }
    }

    /// Appends `\input{name}`.
    pub fn add_input(&mut self, name: &str) {
        self.body.content.push_str(&input_markup(name));
    }

    /// Appends `\includegraphics{name}`.
    pub fn add_graphic(&mut self, name: &str) {
        self.body.content.push_str(&graphic_markup(name));
    }

    /// Appends text verbatim.
    pub fn add_raw_text(&mut self, text: &str) {
        trace!(len = text.len(); "Appending raw text");
        self.body.content.push_str(text);
    }

    /// Appends `\clearpage`.
    pub fn clear_page(&mut self) {
        self.add_raw_text("\\clearpage\n\n");
    }

    /// Appends `comment` as LaTeX comment lines, one `% ` line per input line.
    pub fn add_comment(&mut self, comment: &str) {
        for line in comment.lines() {
            self.body.content.push_str(&format!("% {line}\n"));
        }
    }

    // ---------------------------------------------------------------------
    // Colors
    // ---------------------------------------------------------------------

    /// Registers a six-digit hex color for the preamble.
    ///
    /// # Errors
    ///
    /// Returns [`TexError::Color`] if `hex` is not six hex digits.
    pub fn define_color(&mut self, hex: &str) -> Result<(), TexError> {
        self.define(HexColor::new(hex)?);
        Ok(())
    }

    /// Registers an already validated color.
    pub fn define(&mut self, color: HexColor) {
        if self.colors.define(color) {
            trace!(colors = self.colors.len(); "Color registered");
        }
    }

    pub fn colors(&self) -> &ColorRegistry {
        &self.colors
    }

    // ---------------------------------------------------------------------
    // Output
    // ---------------------------------------------------------------------

    /// Writes the complete document to `<directory>/<name>.tex`.
    ///
    /// # Errors
    ///
    /// Returns [`TexError::Write`] if the file cannot be created or written.
    pub fn save(&self) -> Result<PathBuf, TexError> {
        let path = self.tex_path();
        write_file(&path, &self.full_text())?;
        Ok(path)
    }

    /// Writes only the body to `<directory>/<name>_body.tex`.
    pub fn save_body(&self) -> Result<PathBuf, TexError> {
        let path = self.body_path();
        write_file(&path, &self.body_text())?;
        Ok(path)
    }

    /// Saves the document and runs the compiler on it, returning the PDF path.
    pub fn compile(&self) -> Result<PathBuf, TexError> {
        let tex_path = self.save()?;
        self.toolchain.compile(&self.directory, &tex_path)?;
        Ok(self.pdf_path())
    }

    /// Compiles the document and opens the PDF in the viewer.
    pub fn display(&self) -> Result<PathBuf, TexError> {
        let pdf_path = self.compile()?;
        self.toolchain.view(&pdf_path)?;
        Ok(pdf_path)
    }
}

/// Anything that renders into a [`Document`].
///
/// Implementors only provide access to their document; saving, compiling and
/// captions come for free.
pub trait Printer {
    fn document(&self) -> &Document;

    fn document_mut(&mut self) -> &mut Document;

    fn save(&self) -> Result<PathBuf, TexError> {
        self.document().save()
    }

    fn save_body(&self) -> Result<PathBuf, TexError> {
        self.document().save_body()
    }

    fn compile(&self) -> Result<PathBuf, TexError> {
        self.document().compile()
    }

    fn display(&self) -> Result<PathBuf, TexError> {
        self.document().display()
    }

    fn set_caption(&mut self, caption: &str) {
        self.document_mut().set_caption(caption);
    }
}

impl Printer for Document {
    fn document(&self) -> &Document {
        self
    }

    fn document_mut(&mut self) -> &mut Document {
        self
    }
}

fn input_markup(name: &str) -> String {
    format!("\\input{{{name}}}\n\n")
}

fn graphic_markup(name: &str) -> String {
    format!("\\includegraphics{{{name}}}\n\n")
}

fn split_path(path: &Path) -> (PathBuf, String) {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = file_name
        .strip_suffix(".tex")
        .map(str::to_string)
        .unwrap_or(file_name);

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    (directory, name)
}

/// Writes `contents` to `path` through a scoped file handle.
fn write_file(path: &Path, contents: &str) -> Result<(), TexError> {
    info!(path = path.display().to_string(); "Saving file");

    let mut file = File::create(path).map_err(|err| {
        error!(path = path.display().to_string(), err:err; "Failed to create file");
        TexError::write(path, err)
    })?;

    if let Err(err) = file.write_all(contents.as_bytes()) {
        error!(path = path.display().to_string(), err:err; "Failed to write file");
        return Err(TexError::write(path, err));
    }

    debug!(bytes = contents.len(); "File saved");
    Ok(())
}
