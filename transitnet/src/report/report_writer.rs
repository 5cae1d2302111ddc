use super::{
    connectivity_lines, summary_report, FrequencyOptimizationRow, GraphEdgeRow,
    ServiceFrequencyRow,
};
use crate::{app::AnalysisOutput, TransitNetCliError};
use csv::QuoteStyle;
use flate2::{write::GzEncoder, Compression};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

pub trait ReportWriter {
    /// writes every report file into a shared directory, returning the paths written.
    /// existing files are skipped unless `overwrite` is set; `compress` gzips each file
    /// and appends `.gz` to its name.
    fn write_reports(
        &self,
        output_directory: &Path,
        overwrite: bool,
        compress: bool,
    ) -> Result<Vec<PathBuf>, TransitNetCliError>;
}

pub mod filenames {
    pub const CONNECTIVITY_TXT: &str = "connectivity_analysis.txt";
    pub const CONNECTIVITY_JSON: &str = "connectivity_analysis.json";
    pub const FREQUENCY_OPTIMIZATION: &str = "frequency_optimization.csv";
    pub const SERVICE_FREQUENCY: &str = "service_frequency.csv";
    pub const COVERAGE: &str = "coverage_analysis.csv";
    pub const GRAPH_EDGES: &str = "graph_edges.csv";
    pub const SUMMARY: &str = "summary.txt";
}

impl ReportWriter for AnalysisOutput {
    fn write_reports(
        &self,
        output_directory: &Path,
        overwrite: bool,
        compress: bool,
    ) -> Result<Vec<PathBuf>, TransitNetCliError> {
        create_directory(output_directory)?;
        let mut written = vec![];

        if let Some((path, mut w)) = create_output(
            output_directory,
            filenames::CONNECTIVITY_TXT,
            overwrite,
            compress,
        )? {
            for line in connectivity_lines(&self.connectivity) {
                writeln!(w, "{line}")?;
            }
            w.flush()?;
            written.push(path);
        }

        if let Some((path, mut w)) = create_output(
            output_directory,
            filenames::CONNECTIVITY_JSON,
            overwrite,
            compress,
        )? {
            serde_json::to_writer_pretty(&mut w, &self.connectivity)?;
            writeln!(w)?;
            w.flush()?;
            written.push(path);
        }

        let rows = self
            .frequency
            .recommendations()
            .into_iter()
            .map(FrequencyOptimizationRow::from);
        if let Some(path) = write_csv(
            output_directory,
            filenames::FREQUENCY_OPTIMIZATION,
            rows,
            overwrite,
            compress,
        )? {
            written.push(path);
        }

        let rows = self.service_frequency.iter().map(ServiceFrequencyRow::from);
        if let Some(path) = write_csv(
            output_directory,
            filenames::SERVICE_FREQUENCY,
            rows,
            overwrite,
            compress,
        )? {
            written.push(path);
        }

        if let Some(path) = write_csv(
            output_directory,
            filenames::COVERAGE,
            self.coverage.iter(),
            overwrite,
            compress,
        )? {
            written.push(path);
        }

        let rows = self.graph_build.graph.edges().map(GraphEdgeRow::from);
        if let Some(path) = write_csv(
            output_directory,
            filenames::GRAPH_EDGES,
            rows,
            overwrite,
            compress,
        )? {
            written.push(path);
        }

        if let Some((path, mut w)) =
            create_output(output_directory, filenames::SUMMARY, overwrite, compress)?
        {
            writeln!(w, "{}", summary_report(self))?;
            w.flush()?;
            written.push(path);
        }

        log::info!(
            "wrote {} report files to {}",
            written.len(),
            output_directory.display()
        );
        Ok(written)
    }
}

pub(crate) fn create_directory(directory: &Path) -> Result<(), TransitNetCliError> {
    if !directory.is_dir() && std::fs::create_dir_all(directory).is_err() {
        let dirname = directory.as_os_str().to_string_lossy();
        return Err(TransitNetCliError::InternalError(format!(
            "unable to create directory {}",
            &dirname
        )));
    }
    Ok(())
}

/// helper function to open an output file while respecting the user's overwrite
/// preference. returns None when the file exists and should be left alone.
pub(crate) fn create_output(
    directory: &Path,
    filename: &str,
    overwrite: bool,
    compress: bool,
) -> Result<Option<(PathBuf, Box<dyn Write>)>, TransitNetCliError> {
    let filepath = if compress {
        directory.join(format!("{filename}.gz"))
    } else {
        directory.join(filename)
    };
    if filepath.exists() && !overwrite {
        log::info!("{} exists, skipping", filepath.display());
        return Ok(None);
    }
    let file = File::create(&filepath)?;
    let writer: Box<dyn Write> = if compress {
        Box::new(GzEncoder::new(file, Compression::default()))
    } else {
        Box::new(BufWriter::new(file))
    };
    Ok(Some((filepath, writer)))
}

pub(crate) fn create_csv_writer(
    directory: &Path,
    filename: &str,
    overwrite: bool,
    compress: bool,
) -> Result<Option<(PathBuf, csv::Writer<Box<dyn Write>>)>, TransitNetCliError> {
    let result = create_output(directory, filename, overwrite, compress)?.map(|(path, w)| {
        let writer = csv::WriterBuilder::new()
            .has_headers(true)
            .quote_style(QuoteStyle::Necessary)
            .from_writer(w);
        (path, writer)
    });
    Ok(result)
}

fn write_csv<T: serde::Serialize>(
    directory: &Path,
    filename: &str,
    rows: impl Iterator<Item = T>,
    overwrite: bool,
    compress: bool,
) -> Result<Option<PathBuf>, TransitNetCliError> {
    let Some((path, mut writer)) = create_csv_writer(directory, filename, overwrite, compress)?
    else {
        return Ok(None);
    };
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| TransitNetCliError::CsvWriteError(String::from(filename), e))?;
    }
    writer.flush()?;
    Ok(Some(path))
}
