use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn exits_cleanly_on_menu_option_six() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("agilstore").unwrap();
    cmd.current_dir(temp_dir.path())
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Gerenciamento de Produtos - AgilStore ===",
        ))
        .stdout(predicate::str::contains("6. Sair"));
}

#[test]
fn exits_cleanly_when_stdin_closes() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("agilstore").unwrap();
    cmd.current_dir(temp_dir.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Escolha uma opção: "));
}

#[test]
fn seeds_an_empty_database_on_first_run() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("agilstore").unwrap();
    cmd.current_dir(temp_dir.path())
        .write_stdin("6\n")
        .assert()
        .success();

    let db = temp_dir.path().join("data").join("database.json");
    assert_eq!(std::fs::read_to_string(db).unwrap(), "[]");
}

#[test]
fn add_then_list_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();

    // Empty store: the category picker only offers "create new" as [1].
    let mut cmd = Command::cargo_bin("agilstore").unwrap();
    cmd.current_dir(temp_dir.path())
        .write_stdin("1\nMouse\n1\nPeriféricos\n10\n49.90\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Produto adicionado com sucesso!"));

    // Fresh process, same working directory: the record came off disk.
    let mut cmd = Command::cargo_bin("agilstore").unwrap();
    cmd.current_dir(temp_dir.path())
        .write_stdin("2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mouse"))
        .stdout(predicate::str::contains("Periféricos"))
        .stdout(predicate::str::contains("49.90"));

    let db = temp_dir.path().join("data").join("database.json");
    let content = std::fs::read_to_string(db).unwrap();
    assert!(content.contains("\"id\": 1"));
    assert!(content.contains("\"name\": \"Mouse\""));
}

#[test]
fn invalid_menu_option_keeps_the_session_alive() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("agilstore").unwrap();
    cmd.current_dir(temp_dir.path())
        .write_stdin("9\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Opção inválida. Tente novamente."));
}

#[test]
fn delete_flow_end_to_end() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("agilstore").unwrap();
    cmd.current_dir(temp_dir.path())
        .write_stdin("1\nMouse\n1\nPeriféricos\n10\n49.90\n4\n1\ny\n2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Produto excluído com sucesso!"))
        .stdout(predicate::str::contains("Nenhum produto cadastrado."));
}
