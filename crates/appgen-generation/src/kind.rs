//! The closed set of generatable template kinds
//!
//! Every kind is described by one row of a static table: how its file name is
//! derived from the entity name, which folder it lands in, and which sibling
//! names its template may reference. Adding a kind means adding a row.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// A kind of generated artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TemplateKind {
    /// `{Entity}Dto`
    DefaultDto,
    /// `Create{Entity}Dto`
    CreateDto,
    /// `Update{Entity}Dto`
    UpdateDto,
    /// `Paged{Entity}ResultRequestDto`
    PagedDto,
    /// `{Entity}MapProfile`
    MapProfile,
    /// `I{Entity}AppService`
    Interface,
    /// `{Entity}AppService`
    Class,
}

/// Folder a kind's file is placed in, relative to the entity folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KindFolder {
    /// The entity folder itself
    Entity,
    /// The DTO sub-folder of the entity folder
    Dto,
}

/// File-name formatter: `prefix + entity + suffix`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileNamePattern {
    /// Text before the entity name
    pub prefix: &'static str,
    /// Text after the entity name
    pub suffix: &'static str,
}

impl FileNamePattern {
    /// Apply the pattern to an entity name
    pub fn format(&self, entity: &str) -> String {
        format!("{}{}{}", self.prefix, entity, self.suffix)
    }
}

/// Per-kind row of the template table
#[derive(Debug, Clone, Copy)]
pub struct TemplateDescriptor {
    /// The kind this row describes
    pub kind: TemplateKind,
    /// Identifier used for catalog lookup and display
    pub identifier: &'static str,
    /// File-name formatter
    pub file_name: FileNamePattern,
    /// Folder placement
    pub folder: KindFolder,
    /// Whether `{entity}` is substituted
    pub substitutes_entity: bool,
    /// Tokens naming sibling files, with the kind whose name they receive
    pub sibling_tokens: &'static [(&'static str, TemplateKind)],
}

// `{defaultdto}` and `{updatedto}` resolve to the create DTO name; shipped
// templates rely on that mapping.
const MAPPING_TOKENS: &[(&str, TemplateKind)] = &[
    ("{defaultdto}", TemplateKind::CreateDto),
    ("{createdto}", TemplateKind::CreateDto),
    ("{updatedto}", TemplateKind::CreateDto),
];

const SERVICE_TOKENS: &[(&str, TemplateKind)] = &[
    ("{pageddto}", TemplateKind::PagedDto),
    ("{defaultdto}", TemplateKind::CreateDto),
    ("{createdto}", TemplateKind::CreateDto),
    ("{updatedto}", TemplateKind::CreateDto),
    ("{interface}", TemplateKind::Interface),
];

static DESCRIPTORS: [TemplateDescriptor; 7] = [
    TemplateDescriptor {
        kind: TemplateKind::DefaultDto,
        identifier: "DefaultDto",
        file_name: FileNamePattern { prefix: "", suffix: "Dto" },
        folder: KindFolder::Dto,
        substitutes_entity: false,
        sibling_tokens: &[],
    },
    TemplateDescriptor {
        kind: TemplateKind::CreateDto,
        identifier: "CreateDto",
        file_name: FileNamePattern { prefix: "Create", suffix: "Dto" },
        folder: KindFolder::Dto,
        substitutes_entity: false,
        sibling_tokens: &[],
    },
    TemplateDescriptor {
        kind: TemplateKind::UpdateDto,
        identifier: "UpdateDto",
        file_name: FileNamePattern { prefix: "Update", suffix: "Dto" },
        folder: KindFolder::Dto,
        substitutes_entity: false,
        sibling_tokens: &[],
    },
    TemplateDescriptor {
        kind: TemplateKind::PagedDto,
        identifier: "PagedDto",
        file_name: FileNamePattern { prefix: "Paged", suffix: "ResultRequestDto" },
        folder: KindFolder::Dto,
        substitutes_entity: false,
        sibling_tokens: &[],
    },
    TemplateDescriptor {
        kind: TemplateKind::MapProfile,
        identifier: "MapProfile",
        file_name: FileNamePattern { prefix: "", suffix: "MapProfile" },
        folder: KindFolder::Dto,
        substitutes_entity: true,
        sibling_tokens: MAPPING_TOKENS,
    },
    TemplateDescriptor {
        kind: TemplateKind::Interface,
        identifier: "Interface",
        file_name: FileNamePattern { prefix: "I", suffix: "AppService" },
        folder: KindFolder::Entity,
        substitutes_entity: true,
        sibling_tokens: SERVICE_TOKENS,
    },
    TemplateDescriptor {
        kind: TemplateKind::Class,
        identifier: "Class",
        file_name: FileNamePattern { prefix: "", suffix: "AppService" },
        folder: KindFolder::Entity,
        substitutes_entity: true,
        sibling_tokens: SERVICE_TOKENS,
    },
];

impl TemplateKind {
    /// All kinds, in generation order
    pub const ALL: [TemplateKind; 7] = [
        TemplateKind::DefaultDto,
        TemplateKind::CreateDto,
        TemplateKind::UpdateDto,
        TemplateKind::PagedDto,
        TemplateKind::MapProfile,
        TemplateKind::Interface,
        TemplateKind::Class,
    ];

    /// Table row for this kind
    pub fn descriptor(self) -> &'static TemplateDescriptor {
        &DESCRIPTORS[self as usize]
    }

    /// Identifier used for catalog lookup (`PagedDto`, `Class`, ...)
    pub fn identifier(self) -> &'static str {
        self.descriptor().identifier
    }

    /// Whether the identifier ends in `Dto`
    pub fn is_dto(self) -> bool {
        self.identifier().ends_with("Dto")
    }

    /// File name without extension for `entity`
    pub fn file_stem(self, entity: &str) -> String {
        self.descriptor().file_name.format(entity)
    }

    /// Folder placement
    pub fn folder(self) -> KindFolder {
        self.descriptor().folder
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for TemplateKind {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        TemplateKind::ALL
            .into_iter()
            .find(|kind| kind.identifier().eq_ignore_ascii_case(name))
            .ok_or_else(|| GenerationError::UnknownTemplateKind(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows_match_kinds() {
        for kind in TemplateKind::ALL {
            assert_eq!(kind.descriptor().kind, kind);
        }
    }

    #[test]
    fn test_file_stems() {
        assert_eq!(TemplateKind::DefaultDto.file_stem("Book"), "BookDto");
        assert_eq!(TemplateKind::CreateDto.file_stem("Book"), "CreateBookDto");
        assert_eq!(TemplateKind::UpdateDto.file_stem("Book"), "UpdateBookDto");
        assert_eq!(TemplateKind::PagedDto.file_stem("Book"), "PagedBookResultRequestDto");
        assert_eq!(TemplateKind::MapProfile.file_stem("Book"), "BookMapProfile");
        assert_eq!(TemplateKind::Interface.file_stem("Book"), "IBookAppService");
        assert_eq!(TemplateKind::Class.file_stem("Book"), "BookAppService");
    }

    #[test]
    fn test_is_dto() {
        let dtos: Vec<_> = TemplateKind::ALL.into_iter().filter(|k| k.is_dto()).collect();
        assert_eq!(
            dtos,
            vec![
                TemplateKind::DefaultDto,
                TemplateKind::CreateDto,
                TemplateKind::UpdateDto,
                TemplateKind::PagedDto,
            ]
        );
    }

    #[test]
    fn test_folders() {
        assert_eq!(TemplateKind::MapProfile.folder(), KindFolder::Dto);
        assert_eq!(TemplateKind::PagedDto.folder(), KindFolder::Dto);
        assert_eq!(TemplateKind::Interface.folder(), KindFolder::Entity);
        assert_eq!(TemplateKind::Class.folder(), KindFolder::Entity);
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("pageddto".parse::<TemplateKind>().unwrap(), TemplateKind::PagedDto);
        assert_eq!(" Class ".parse::<TemplateKind>().unwrap(), TemplateKind::Class);
        assert_eq!("MAPPROFILE".parse::<TemplateKind>().unwrap(), TemplateKind::MapProfile);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "Controller".parse::<TemplateKind>().unwrap_err();
        assert!(matches!(err, GenerationError::UnknownTemplateKind(name) if name == "Controller"));
    }

    #[test]
    fn test_display_uses_identifier() {
        assert_eq!(TemplateKind::UpdateDto.to_string(), "UpdateDto");
    }

    #[test]
    fn test_sibling_tokens_scope() {
        assert!(TemplateKind::CreateDto.descriptor().sibling_tokens.is_empty());
        assert_eq!(TemplateKind::MapProfile.descriptor().sibling_tokens.len(), 3);
        assert_eq!(TemplateKind::Class.descriptor().sibling_tokens.len(), 5);
    }
}
