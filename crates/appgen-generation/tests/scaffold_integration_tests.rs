//! Scaffolding runs against a realistic project layout on disk

use std::fs;

use appgen_generation::{
    FileMaterializer, FileOutcome, ProjectContext, Scaffolder, TemplateCatalog, TemplateEngine,
    TemplateKind,
};
use tempfile::TempDir;

const CSPROJ: &str = r#"<Project Sdk="Microsoft.NET.Sdk">
  <PropertyGroup>
    <TargetFramework>net8.0</TargetFramework>
    <RootNamespace>Acme.BookStore</RootNamespace>
  </PropertyGroup>
</Project>
"#;

fn write_catalog(dir: &std::path::Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("Interface.txt"), "namespace {namespace}\n{\n    public interface {classname}\n    {\n        $\n    }\n}\n").unwrap();
    fs::write(dir.join("CreateDto.txt"), "namespace {namespace}\n{\n    public class {classname} { }\n}\n").unwrap();
    fs::write(dir.join("mapprofile.TXT"), "// {entity} <-> {defaultdto}\n").unwrap();
}

#[tokio::test]
async fn scaffold_inside_discovered_project() {
    let temp_dir = TempDir::new().unwrap();
    let project_root = temp_dir.path().join("src").join("Acme.BookStore.Application");
    let target = project_root.join("Catalog");
    fs::create_dir_all(&target).unwrap();
    fs::write(project_root.join("Acme.BookStore.Application.csproj"), CSPROJ).unwrap();

    let templates = temp_dir.path().join("templates");
    write_catalog(&templates);

    let project = ProjectContext::discover(&target).unwrap();
    assert_eq!(project.root(), project_root.as_path());
    assert_eq!(project.root_namespace(), Some("Acme.BookStore"));

    let engine = TemplateEngine::new(TemplateCatalog::load(&templates).unwrap());
    let scaffolder = Scaffolder::new(engine, FileMaterializer::new(), project);

    let report = scaffolder.run("authors/, book", &target).await;

    assert_eq!(report.entries, vec!["authors/", "book"]);
    assert!(target.join("authors").is_dir());
    assert_eq!(report.created_count(), 7);

    let interface = fs::read(target.join("Book").join("IBookAppService.cs")).unwrap();
    let interface = String::from_utf8(interface[3..].to_vec()).unwrap();
    assert_eq!(
        interface,
        "namespace Acme.BookStore.Catalog.Book\r\n{\r\n    public interface IBookAppService\r\n    {\r\n        \r\n    }\r\n}\r\n"
    );

    let dto = fs::read_to_string(target.join("Book").join("Dto").join("CreateBookDto.cs")).unwrap();
    assert!(dto.contains("namespace Acme.BookStore.Catalog.Book.Dto\r\n"));

    let profile = fs::read_to_string(target.join("Book").join("Dto").join("BookMapProfile.cs")).unwrap();
    assert!(profile.ends_with("// Book <-> CreateBookDto\r\n"));

    // No class template: the class file is still written, empty and without a caret
    let last = report.last_created().unwrap();
    assert_eq!(last.kind, TemplateKind::Class);
    assert!(matches!(
        &last.outcome,
        FileOutcome::Created { cursor_offset: None, .. }
    ));
    let interface_report = report
        .files
        .iter()
        .find(|f| f.kind == TemplateKind::Interface)
        .unwrap();
    assert!(matches!(
        &interface_report.outcome,
        FileOutcome::Created { cursor_offset: Some(95), .. }
    ));
}

#[tokio::test]
async fn rerun_reports_existing_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let scaffolder = Scaffolder::new(
        TemplateEngine::new(TemplateCatalog::empty()),
        FileMaterializer::new(),
        ProjectContext::new(root),
    );

    let first = scaffolder.run("book, Book, order", root).await;
    assert_eq!(first.entries, vec!["book", "order"]);
    assert_eq!(first.created_count(), 14);

    let second = scaffolder.run("order", root).await;
    assert_eq!(second.created_count(), 0);
    assert_eq!(second.skipped_count(), 7);
    assert!(second.folders.is_empty());
    assert_eq!(second.last_created(), None);
}
