//! End-to-end imports into a recording sink.

use glam::Vec3;
use molimport::elements::ElementTable;
use molimport::importer::Importer;
use molimport::options::{ImportOptions, StickStyle};
use molimport::pdb::PdbStructure;
use molimport::sink::{Instancing, ObjectKind, PrimitiveKind, RecordingSink};

fn hetatm(serial: usize, name: &str, pos: [f32; 3], element: &str) -> String {
    format!(
        "HETATM{serial:>5} {name:<4} LIG A   1    {:8.3}{:8.3}{:8.3}  1.00  0.00          {element:>2}\n",
        pos[0], pos[1], pos[2]
    )
}

fn carbon_monoxide() -> String {
    let mut text = String::from("HEADER    TEST\n");
    text += &hetatm(1, " C", [1.0, 2.0, 3.0], "C");
    text += &hetatm(2, " O", [2.0, 4.0, 5.0], "O");
    text += "CONECT    1    2\nCONECT    2    1\nEND\n";
    text
}

fn cylinders_options() -> ImportOptions {
    let mut opts = ImportOptions::default();
    opts.sticks.style = StickStyle::Cylinders;
    opts.sticks.one_object = false;
    opts
}

#[test]
fn two_atoms_one_bond() {
    let _ = env_logger::builder().is_test(true).try_init();
    let table = ElementTable::default_table();
    let importer = Importer::new(table, cylinders_options()).unwrap();
    let mut sink = RecordingSink::new();
    let report = importer.import_str(&carbon_monoxide(), &mut sink).unwrap();

    assert_eq!(report.atoms, 2);
    assert_eq!(report.sticks, 1);
    assert_eq!(report.duplicate_sticks, 1);
    assert_eq!(report.elements, ["Carbon", "Oxygen"]);
    assert!((report.center - Vec3::new(1.5, 3.0, 4.0)).length() < 1e-5);

    // Both atoms sit symmetric about the origin after centring.
    let carbon = sink.find("Mesh_Carbon").unwrap().1.mesh().unwrap().clone();
    let oxygen = sink.find("Mesh_Oxygen").unwrap().1.mesh().unwrap().clone();
    let c = carbon.vertices[0];
    let o = oxygen.vertices[0];
    assert!((c + o).length() < 1e-5);

    // One cylinder whose length is the interatomic distance.
    assert_eq!(report.stick_objects.len(), 1);
    let cylinder = sink
        .object(report.stick_objects[0])
        .unwrap()
        .primitive()
        .unwrap()
        .clone();
    let PrimitiveKind::Cylinder { depth, .. } = cylinder.kind else {
        panic!("expected a cylinder");
    };
    assert!((depth - 3.0).abs() < 1e-5);
    assert!(cylinder.location.length() < 1e-5);
    let axis = cylinder.rotation * Vec3::Z;
    assert!(axis.cross(o - c).length() < 1e-4);
}

#[test]
fn balls_are_instanced_on_element_meshes() {
    let table = ElementTable::default_table();
    let importer = Importer::new(table, ImportOptions::default()).unwrap();
    let mut sink = RecordingSink::new();
    let report = importer.import_str(&carbon_monoxide(), &mut sink).unwrap();

    for &mesh_id in &report.atom_meshes {
        let mesh = sink.object(mesh_id).unwrap();
        assert!(matches!(
            mesh.kind,
            ObjectKind::Mesh {
                instancing: Instancing::Verts,
                ..
            }
        ));
        let balls: Vec<_> = sink.children_of(mesh_id).collect();
        assert_eq!(balls.len(), 1);
        assert!(balls[0].1.material.is_some());
    }
    let ball = sink.find("Ball_Oxygen").unwrap().1.primitive().unwrap();
    let oxygen = table.get("O").unwrap();
    assert_eq!(ball.scale, Vec3::splat(oxygen.radii[0]));
}

#[test]
fn double_bond_draws_two_offset_cylinders() {
    let mut text = hetatm(1, " C1", [0.0, 0.0, 0.0], "C");
    text += &hetatm(2, " C2", [1.34, 0.0, 0.0], "C");
    text += "CONECT    1    2    2\n";

    let mut opts = cylinders_options();
    opts.sticks.infer_bond_orders = true;
    opts.scene.put_to_center = false;
    let importer =
        Importer::new(ElementTable::default_table(), opts.clone()).unwrap();
    let mut sink = RecordingSink::new();
    let report = importer.import_str(&text, &mut sink).unwrap();

    assert_eq!(report.stick_objects.len(), 2);
    let locations: Vec<Vec3> = report
        .stick_objects
        .iter()
        .map(|&id| sink.object(id).unwrap().primitive().unwrap().location)
        .collect();
    let midpoint = Vec3::new(0.67, 0.0, 0.0);
    let spread = opts.sticks.repeat_spacing();
    assert!(((locations[0] + locations[1]) / 2.0 - midpoint).length() < 1e-5);
    let gap = (locations[0] - locations[1]).length();
    assert!((gap - 2.0 * spread).abs() < 1e-5);
}

#[test]
fn import_from_file_with_custom_elements() {
    let dir = std::env::temp_dir()
        .join(format!("molimport-e2e-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let data = dir.join("elements.txt");
    std::fs::write(
        &data,
        "Atom\n====\nNumber : 6\nName : Carbon\nShort name : C\nColor : 1.0,0.0,0.0\nRadius used : 2.5\n",
    )
    .unwrap();
    let pdb = dir.join("co.pdb");
    std::fs::write(&pdb, carbon_monoxide()).unwrap();

    let table = ElementTable::load_custom(&data).unwrap();
    let structure = PdbStructure::from_path(
        &pdb,
        &table,
        molimport::elements::RadiusType::Used,
        true,
        false,
    )
    .unwrap();
    assert_eq!(structure.atoms[0].radius, 2.5);
    assert_eq!(structure.atoms[0].color, [1.0, 0.0, 0.0, 1.0]);

    let importer = Importer::new(&table, ImportOptions::default()).unwrap();
    let mut sink = RecordingSink::new();
    let report = importer.import_path(&pdb, &mut sink).unwrap();
    assert_eq!(report.atoms, 2);
    assert_eq!(sink.materials()[0].color, [1.0, 0.0, 0.0, 1.0]);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_file_is_an_io_error() {
    let table = ElementTable::default_table();
    let importer = Importer::new(table, ImportOptions::default()).unwrap();
    let mut sink = RecordingSink::new();
    let path = std::path::Path::new("/nonexistent/structure.pdb");
    let err = importer.import_path(path, &mut sink).unwrap_err();
    assert!(matches!(err, molimport::error::ImportError::Io(_)));
}
