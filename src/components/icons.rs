//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;
use studyhub_core::FileKind;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArchive as FileArchive, LuArrowLeft as Back, LuBookOpen as FilePdf, LuBraces as FileData,
        LuChevronDown as ChevronDown, LuChevronRight as ChevronRight, LuDatabase as FileDatabase,
        LuDownload as Download, LuExternalLink as ExternalLink, LuFile as File,
        LuFileCode as FileCode, LuFileText as FileText, LuFolder as Folder,
        LuFolderOpen as FolderOpen, LuGithub as Github, LuGlobe as FileMarkup,
        LuMenu as Menu, LuMoon as Moon, LuPalette as FileStyle, LuSun as Sun, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowLeft as Back, BsBoxArrowUpRight as ExternalLink, BsBraces as FileData,
        BsChevronDown as ChevronDown, BsChevronRight as ChevronRight, BsDatabase as FileDatabase,
        BsDownload as Download, BsFileEarmark as File, BsFileEarmarkCode as FileCode,
        BsFileEarmarkPdf as FilePdf, BsFileEarmarkText as FileText,
        BsFileEarmarkZip as FileArchive, BsFolder2Open as FolderOpen, BsFolderFill as Folder,
        BsGithub as Github, BsGlobe as FileMarkup, BsList as Menu,
        BsMoonFill as Moon, BsPalette as FileStyle, BsSunFill as Sun, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(BACK, Back);
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(FOLDER, Folder);
themed_icon!(FOLDER_OPEN, FolderOpen);
themed_icon!(FILE, File);
themed_icon!(FILE_CODE, FileCode);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_MARKUP, FileMarkup);
themed_icon!(FILE_STYLE, FileStyle);
themed_icon!(FILE_DATA, FileData);
themed_icon!(FILE_DATABASE, FileDatabase);
themed_icon!(FILE_ARCHIVE, FileArchive);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(GITHUB, Github);
themed_icon!(DOWNLOAD, Download);
themed_icon!(EXTERNAL_LINK, ExternalLink);

/// Icon for a listing row.
pub fn for_kind(kind: FileKind) -> Icon {
    match kind {
        FileKind::Folder => FOLDER,
        FileKind::Script | FileKind::Php => FILE_CODE,
        FileKind::Markup => FILE_MARKUP,
        FileKind::Style => FILE_STYLE,
        FileKind::Data => FILE_DATA,
        FileKind::Database => FILE_DATABASE,
        FileKind::Archive => FILE_ARCHIVE,
        FileKind::Pdf => FILE_PDF,
        FileKind::Document => FILE_TEXT,
        FileKind::Text => FILE,
    }
}
