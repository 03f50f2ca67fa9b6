use std::fs;
use std::path::Path;

use screening_server::manifest::{build_manifest, write_manifest, SlideManifest};

fn touch(path: &Path) {
    fs::write(path, b"").unwrap();
}

#[test]
fn slides_sort_numerically_and_folders_are_encoded() {
    let dir = tempfile::tempdir().unwrap();
    let adhd = dir.path().join("ADHD");
    let anxiety = dir.path().join("Anxiety & Panic");
    let empty = dir.path().join("Empty");
    fs::create_dir(&adhd).unwrap();
    fs::create_dir(&anxiety).unwrap();
    fs::create_dir(&empty).unwrap();

    for name in ["Slide10.PNG", "Slide2.PNG", "slide1.png", "notes.txt", "SlideX.PNG"] {
        touch(&adhd.join(name));
    }
    touch(&anxiety.join("Slide1.PNG"));
    touch(&empty.join("readme.md"));
    touch(&dir.path().join("Slide1.PNG"));

    let manifest = build_manifest(dir.path(), "about-conditions").unwrap();

    assert_eq!(manifest.len(), 2);
    assert_eq!(
        manifest["ADHD"],
        vec![
            "/about-conditions/ADHD/slide1.png",
            "/about-conditions/ADHD/Slide2.PNG",
            "/about-conditions/ADHD/Slide10.PNG",
        ]
    );
    assert_eq!(
        manifest["Anxiety & Panic"],
        vec!["/about-conditions/Anxiety%20%26%20Panic/Slide1.PNG"]
    );
    assert!(!manifest.contains_key("Empty"));
}

#[test]
fn written_manifest_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("Depression");
    fs::create_dir(&folder).unwrap();
    touch(&folder.join("Slide1.PNG"));

    let output = dir.path().join("manifest.json");
    let built = write_manifest(dir.path(), "slides", &output).unwrap();

    let on_disk: SlideManifest =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(on_disk, built);
    assert_eq!(on_disk["Depression"], vec!["/slides/Depression/Slide1.PNG"]);
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(build_manifest(&dir.path().join("absent"), "about-conditions").is_err());
}

#[test]
fn folder_names_keep_component_punctuation() {
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("Grief (Loss)! Café");
    fs::create_dir(&folder).unwrap();
    touch(&folder.join("Slide1.png"));

    let manifest = build_manifest(dir.path(), "slides").unwrap();

    assert_eq!(
        manifest["Grief (Loss)! Café"],
        vec!["/slides/Grief%20(Loss)!%20Caf%C3%A9/Slide1.png"]
    );
}
