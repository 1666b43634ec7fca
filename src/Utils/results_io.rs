use crate::somelinalg::linsys_errors::LinSysError;
use csv::Writer;
use nalgebra::{DMatrix, DVector};
use std::path::Path;

/// Writes the solution as two columns: index of the unknown and its value.
pub fn save_solution_to_csv<P: AsRef<Path>>(x: &DVector<f64>, path: P) -> Result<(), LinSysError> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(["i", "x"])?;
    for (i, v) in x.iter().enumerate() {
        writer.write_record([i.to_string(), v.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes a matrix row by row, header is c0, c1, ...
pub fn save_matrix_to_csv<P: AsRef<Path>>(m: &DMatrix<f64>, path: P) -> Result<(), LinSysError> {
    let mut writer = Writer::from_path(path)?;
    let headers: Vec<String> = (0..m.ncols()).map(|j| format!("c{}", j)).collect();
    writer.write_record(&headers)?;
    for row in m.row_iter() {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

/// "result.csv" + "L" -> "result_L.csv"
pub fn suffixed_path(path: &str, suffix: &str) -> String {
    let p = Path::new(path);
    let stem = p.file_stem().and_then(|s| s.to_str()).unwrap_or("result");
    let ext = p.extension().and_then(|s| s.to_str()).unwrap_or("csv");
    let name = format!("{}_{}.{}", stem, suffix, ext);
    match p.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            parent.join(name).to_string_lossy().into_owned()
        }
        _ => name,
    }
}
