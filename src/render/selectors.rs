//! Layout algorithm and output format selectors

use std::fmt;
use std::str::FromStr;

use crate::error::DrawError;

macro_rules! selector_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $parameter:literal {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The name Graphviz knows this selector by
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            pub fn names() -> impl Iterator<Item = &'static str> {
                Self::ALL.iter().map(|s| s.as_str())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DrawError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    _ => Err(DrawError::invalid_argument($parameter, s, Self::names())),
                }
            }
        }
    };
}

selector_enum! {
    /// Graphviz layout engine, passed as `-K<name>`
    LayoutAlgorithm, "layout algorithm" {
        Dot => "dot",
        Neato => "neato",
        Twopi => "twopi",
        Circo => "circo",
        Fdp => "fdp",
        Sfdp => "sfdp",
        Osage => "osage",
        Patchwork => "patchwork",
    }
}

selector_enum! {
    /// Graphviz output format, passed as `-T<name>`
    OutputFormat, "output format" {
        Canon => "canon",
        Cmap => "cmap",
        Cmapx => "cmapx",
        CmapxNp => "cmapx_np",
        Dia => "dia",
        Dot => "dot",
        Fig => "fig",
        Gd => "gd",
        Gd2 => "gd2",
        Gif => "gif",
        Hpgl => "hpgl",
        Imap => "imap",
        ImapNp => "imap_np",
        Ismap => "ismap",
        Jpe => "jpe",
        Jpeg => "jpeg",
        Jpg => "jpg",
        Mif => "mif",
        Mp => "mp",
        Pcl => "pcl",
        Pdf => "pdf",
        Pic => "pic",
        Plain => "plain",
        PlainExt => "plain-ext",
        Png => "png",
        Ps => "ps",
        Ps2 => "ps2",
        Svg => "svg",
        Svgz => "svgz",
        Vml => "vml",
        Vmlz => "vmlz",
        Vrml => "vrml",
        Vtx => "vtx",
        Wbmp => "wbmp",
        Xdot => "xdot",
        Xlib => "xlib",
        Bmp => "bmp",
    }
}

impl Default for LayoutAlgorithm {
    fn default() -> Self {
        LayoutAlgorithm::Dot
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Png
    }
}

impl OutputFormat {
    /// The in-memory decoder for this format, if it is a static raster
    /// encoding the image library reads
    pub fn image_format(&self) -> Option<image::ImageFormat> {
        match self {
            OutputFormat::Png => Some(image::ImageFormat::Png),
            OutputFormat::Jpg | OutputFormat::Jpeg | OutputFormat::Jpe => {
                Some(image::ImageFormat::Jpeg)
            }
            OutputFormat::Gif => Some(image::ImageFormat::Gif),
            OutputFormat::Bmp => Some(image::ImageFormat::Bmp),
            _ => None,
        }
    }

    pub fn is_raster_image(&self) -> bool {
        self.image_format().is_some()
    }

    pub fn is_vector(&self) -> bool {
        matches!(
            self,
            OutputFormat::Svg
                | OutputFormat::Svgz
                | OutputFormat::Pdf
                | OutputFormat::Ps
                | OutputFormat::Ps2
                | OutputFormat::Fig
                | OutputFormat::Vml
                | OutputFormat::Vmlz
        )
    }

    /// File extension used when writing this format next to its input
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::PlainExt => "txt",
            OutputFormat::Plain => "txt",
            other => other.as_str(),
        }
    }
}
