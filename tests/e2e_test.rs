/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ORDERS_CSV: &str = "\
Payment Time,Order Number,Order Status,Channel,Store Name,Ref No,SKU,Quantity,Note
2024-06-01 08:15:00,SO-1,Completed,Shopee,Main Store,REF-1,BUNDLE_01,1,gift
2024-06-01 09:00:00,SO-2,Completed,Lazada,Main Store,REF-2,PARENT_02,3,
2024-06-01 09:30:00,SO-3,Completed,Shopee,Outlet,REF-3,SINGLE_02,1,
";

const MASTER_CSV: &str = "\
ParentCode,ChildCode,ProductName,Quantity
BUNDLE_01,CHILD_001,Soap,1
BUNDLE_01,CHILD_002,Towel,1
PARENT_02,CHILD_001,Soap,2
";

const EXPECTED_CSV: &str = "\
PaymentTime,OrderNumber,OrderStatus,Channel,StoreName,RefNo,ChildCode,Quantity
2024-06-01 08:15:00,SO-1,Completed,Shopee,Main Store,REF-1,CHILD_001,1
2024-06-01 08:15:00,SO-1,Completed,Shopee,Main Store,REF-1,CHILD_002,1
2024-06-01 09:00:00,SO-2,Completed,Lazada,Main Store,REF-2,CHILD_001,6
2024-06-01 09:30:00,SO-3,Completed,Shopee,Outlet,REF-3,SINGLE_02,1
";

/// Writes the order and master files into `dir`
fn write_inputs(dir: &Path, orders: &str, master: &str) -> (PathBuf, PathBuf) {
    let orders_path = dir.join("orders.csv");
    let master_path = dir.join("master.csv");
    fs::write(&orders_path, orders).unwrap();
    fs::write(&master_path, master).unwrap();
    (orders_path, master_path)
}

fn expand_cmd(dir: &Path, orders: &Path, master: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("bundle-dismantle");
    cmd.current_dir(dir)
        .arg("expand")
        .arg("--orders")
        .arg(orders)
        .arg("--master")
        .arg(master);
    cmd
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("bundle-dismantle")
            .arg("--help")
            .assert()
            .code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("bundle-dismantle")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("bundle-dismantle")
            .args(["expand", "--invalid-option"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("bundle-dismantle")
            .args(["expand", "--orders", "o.csv", "--master", "m.csv", "-f", "xml"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Spreadsheet output is not produced
    #[test]
    fn test_exit_code_spreadsheet_output() {
        let dir = TempDir::new().unwrap();
        let (orders, master) = write_inputs(dir.path(), ORDERS_CSV, MASTER_CSV);

        expand_cmd(dir.path(), &orders, &master)
            .args(["-o", "Result.xlsx"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Unsupported file format"));
        assert!(!dir.path().join("Result.xlsx").exists());
    }

    /// Exit code 1: Non-numeric order quantity
    #[test]
    fn test_exit_code_bad_quantity() {
        let dir = TempDir::new().unwrap();
        let orders_csv = ORDERS_CSV.replace("PARENT_02,3", "PARENT_02,abc");
        let (orders, master) = write_inputs(dir.path(), &orders_csv, MASTER_CSV);
        let output = dir.path().join("Result.csv");

        expand_cmd(dir.path(), &orders, &master)
            .arg("-o")
            .arg(&output)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("SO-2"))
            .stderr(predicate::str::contains("PARENT_02"));
        assert!(!output.exists());
    }

    /// Exit code 1: Missing required column
    #[test]
    fn test_exit_code_missing_column() {
        let dir = TempDir::new().unwrap();
        let (orders, master) =
            write_inputs(dir.path(), ORDERS_CSV, "ParentCode,Quantity\nBUNDLE_01,1\n");

        expand_cmd(dir.path(), &orders, &master)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("ChildCode"));
    }

    /// Exit code 3: Input file does not exist
    #[test]
    fn test_exit_code_missing_input() {
        let dir = TempDir::new().unwrap();
        let (_, master) = write_inputs(dir.path(), ORDERS_CSV, MASTER_CSV);

        expand_cmd(dir.path(), &dir.path().join("missing.csv"), &master)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Input file not found"));
    }
}

#[test]
fn test_e2e_csv_to_stdout() {
    let dir = TempDir::new().unwrap();
    let (orders, master) = write_inputs(dir.path(), ORDERS_CSV, MASTER_CSV);

    expand_cmd(dir.path(), &orders, &master)
        .assert()
        .success()
        .stdout(EXPECTED_CSV)
        .stderr(predicate::str::contains("Indexed 2 bundle(s)"));
}

#[test]
fn test_e2e_csv_to_file() {
    let dir = TempDir::new().unwrap();
    let (orders, master) = write_inputs(dir.path(), ORDERS_CSV, MASTER_CSV);
    let output = dir.path().join("Result.csv");

    expand_cmd(dir.path(), &orders, &master)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&output).unwrap(), EXPECTED_CSV);
}

#[test]
fn test_e2e_json_inferred_from_extension() {
    let dir = TempDir::new().unwrap();
    let (orders, master) = write_inputs(dir.path(), ORDERS_CSV, MASTER_CSV);
    let output = dir.path().join("Result.json");

    expand_cmd(dir.path(), &orders, &master)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["summary"]["order_lines"], 3);
    assert_eq!(json["summary"]["output_lines"], 4);
    assert_eq!(json["lines"][2]["ChildCode"], "CHILD_001");
    assert_eq!(json["lines"][2]["Quantity"], 6);
    assert!(json["metadata"]["run_id"]
        .as_str()
        .unwrap()
        .starts_with("urn:uuid:"));
}

#[test]
fn test_e2e_markdown_format() {
    let dir = TempDir::new().unwrap();
    let (orders, master) = write_inputs(dir.path(), ORDERS_CSV, MASTER_CSV);

    expand_cmd(dir.path(), &orders, &master)
        .args(["-f", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Dismantled Order Lines"))
        .stdout(predicate::str::contains("| CHILD_002 | 1 |"));
}

#[test]
fn test_e2e_output_dir_uses_timestamped_name() {
    let dir = TempDir::new().unwrap();
    let (orders, master) = write_inputs(dir.path(), ORDERS_CSV, MASTER_CSV);
    let out_dir = dir.path().join("out");
    fs::create_dir(&out_dir).unwrap();

    expand_cmd(dir.path(), &orders, &master)
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success();

    let names: Vec<String> = fs::read_dir(&out_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 1);
    assert!(names[0].starts_with("Result_"));
    assert!(names[0].ends_with(".csv"));
    // Result_YYYYMMDD_HHMMSS.csv
    assert_eq!(names[0].len(), "Result_20240101_000000.csv".len());
}

#[test]
fn test_e2e_empty_orders() {
    let dir = TempDir::new().unwrap();
    let header_only = ORDERS_CSV.lines().next().unwrap().to_string() + "\n";
    let (orders, master) = write_inputs(dir.path(), &header_only, MASTER_CSV);

    expand_cmd(dir.path(), &orders, &master)
        .assert()
        .success()
        .stdout("PaymentTime,OrderNumber,OrderStatus,Channel,StoreName,RefNo,ChildCode,Quantity\n");

    expand_cmd(dir.path(), &orders, &master)
        .arg("--reject-empty")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("sheets are empty"));
}

#[test]
fn test_e2e_csv_sheet_name_checked() {
    let dir = TempDir::new().unwrap();
    let (orders, master) = write_inputs(dir.path(), ORDERS_CSV, MASTER_CSV);

    expand_cmd(dir.path(), &orders, &master)
        .args(["--order-sheet", "orders"])
        .assert()
        .success();

    expand_cmd(dir.path(), &orders, &master)
        .args(["--order-sheet", "Sheet9"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Available sheets: orders"));
}

#[test]
fn test_e2e_sheets_command() {
    let dir = TempDir::new().unwrap();
    let (orders, _) = write_inputs(dir.path(), ORDERS_CSV, MASTER_CSV);

    cargo_bin_cmd!("bundle-dismantle")
        .arg("sheets")
        .arg(&orders)
        .assert()
        .success()
        .stdout("orders\n");
}

#[test]
fn test_e2e_template_then_expand() {
    let dir = TempDir::new().unwrap();

    cargo_bin_cmd!("bundle-dismantle")
        .args(["template", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("2 template(s) created"));

    let orders = dir.path().join("Order_Template.csv");
    let master = dir.path().join("Master_Bundle_Template.csv");
    assert!(orders.exists());
    assert!(master.exists());

    expand_cmd(dir.path(), &orders, &master)
        .assert()
        .success()
        .stdout(predicate::str::contains("ORD-0001,Completed,Shopee,Main Store,REF-0001,CHILD_002,1"))
        .stdout(predicate::str::contains("SINGLE_02,1"));

    // Existing templates are never overwritten
    cargo_bin_cmd!("bundle-dismantle")
        .args(["template", "--dir"])
        .arg(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Template already exists"));
}

mod workbook_tests {
    use super::*;

    fn fixture() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/bundles.xlsx")
    }

    fn expand_workbook(master_sheet: &str) -> assert_cmd::Command {
        let mut cmd = cargo_bin_cmd!("bundle-dismantle");
        cmd.arg("expand")
            .arg("--orders")
            .arg(fixture())
            .arg("--master")
            .arg(fixture())
            .args(["--master-sheet", master_sheet]);
        cmd
    }

    #[test]
    fn test_sheets_lists_workbook_sheets() {
        cargo_bin_cmd!("bundle-dismantle")
            .arg("sheets")
            .arg(fixture())
            .assert()
            .success()
            .stdout("Orders\nMaster\nBrokenMaster\n");
    }

    #[test]
    fn test_expand_workbook_to_csv() {
        expand_workbook("Master")
            .assert()
            .success()
            .stdout(
                "PaymentTime,OrderNumber,OrderStatus,Channel,StoreName,RefNo,ChildCode,Quantity\n\
                 2024-01-01 12:00:00,SO-1,Completed,Shopee,Main Store,REF-1,CHILD_001,2\n\
                 2024-01-01 12:00:00,SO-1,Completed,Shopee,Main Store,REF-1,CHILD_002,3.0\n\
                 2024-01-01 18:00:00,SO-2,Completed,Lazada,Outlet,REF-2,SINGLE_02,1\n",
            );
    }

    #[test]
    fn test_order_sheet_selected_by_name() {
        expand_workbook("Master")
            .args(["--order-sheet", "Orders"])
            .assert()
            .success()
            .stdout(predicate::str::contains("SO-2"));
    }

    #[test]
    fn test_missing_order_sheet() {
        expand_workbook("Master")
            .args(["--order-sheet", "June"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Sheet 'June' not found"))
            .stderr(predicate::str::contains(
                "Available sheets: Orders, Master, BrokenMaster",
            ));
    }

    #[test]
    fn test_bad_quantity_reports_sheet_row() {
        expand_workbook("BrokenMaster")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("(master row 5)"));
    }
}
