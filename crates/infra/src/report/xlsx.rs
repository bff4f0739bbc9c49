//! xlsx report writer

use rust_xlsxwriter::{Format, FormatAlign, Workbook, Worksheet};
use std::path::Path;
use tracing::info;

use patchbook_core::domain::{PatchBay, ReportConfig, RoutingPatch};

use super::Result;

/// Writes a patch bay as an xlsx workbook, one worksheet per enabled patch
/// category.
pub struct XlsxReport<'a> {
    config: &'a ReportConfig,
    heading: Format,
    cell: Format,
    cell_bold: Format,
}

impl<'a> XlsxReport<'a> {
    pub fn new(config: &'a ReportConfig) -> Self {
        Self {
            config,
            heading: Format::new().set_bold().set_align(FormatAlign::Center),
            cell: Format::new().set_align(FormatAlign::Left),
            cell_bold: Format::new().set_bold().set_align(FormatAlign::Left),
        }
    }

    /// Render the enabled worksheets and save the workbook to `path`.
    pub fn write(&self, patches: &mut PatchBay, path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();

        if self.config.include_inputs {
            let sheet = workbook.add_worksheet();
            sheet.set_name(self.config.sheet_names.inputs.as_str())?;
            self.write_inputs(sheet, patches.inputs())?;
        }
        if self.config.include_outputs {
            let sheet = workbook.add_worksheet();
            sheet.set_name(self.config.sheet_names.outputs.as_str())?;
            self.write_outputs(sheet, patches.outputs())?;
        }
        if self.config.include_device_links {
            let sheet = workbook.add_worksheet();
            sheet.set_name(self.config.sheet_names.device_links.as_str())?;
            self.write_device_links(sheet, patches.device_links())?;
        }

        workbook.save(path)?;
        info!("Report saved to {}", path.display());
        Ok(())
    }

    fn write_inputs(&self, sheet: &mut Worksheet, patches: &[RoutingPatch]) -> Result<()> {
        let columns = [
            ("Channel", 15.0),
            ("Source Device [A]", 20.0),
            ("Source Ch. [A]", 15.0),
            ("Source Device [B]", 20.0),
            ("Source Ch. [B]", 15.0),
        ];
        self.write_header(sheet, &columns)?;

        for (row, patch) in patches.iter().enumerate() {
            let row = row as u32 + 1;

            let channel = match patch.dst_label() {
                Some(label) => format!("{} ({})", patch.dst_index(), label),
                None => patch.dst_index().to_string(),
            };
            sheet.write_string_with_format(row, 0, channel.as_str(), &self.cell_bold)?;

            if let Some(source) = patch.primary() {
                sheet.write_string_with_format(row, 1, source.name.as_str(), &self.cell)?;
                sheet.write_string_with_format(row, 2, source.index.to_string(), &self.cell)?;
            }
            if let Some(source) = patch.alternate() {
                sheet.write_string_with_format(row, 3, source.name.as_str(), &self.cell)?;
                sheet.write_string_with_format(row, 4, source.index.to_string(), &self.cell)?;
            }
        }
        Ok(())
    }

    fn write_outputs(&self, sheet: &mut Worksheet, patches: &[RoutingPatch]) -> Result<()> {
        let columns = [
            ("Destination", 20.0),
            ("Dest. Ch.", 10.0),
            ("Signal Source", 15.0),
            ("Source Label", 15.0),
        ];
        self.write_header(sheet, &columns)?;

        for (row, patch) in patches.iter().enumerate() {
            let row = row as u32 + 1;

            sheet.write_string_with_format(row, 0, patch.dst_name(), &self.cell)?;
            sheet.write_string_with_format(row, 1, patch.dst_index().to_string(), &self.cell)?;
            if let Some(source) = patch.primary() {
                let signal = format!("{} {}", source.name, source.index);
                sheet.write_string_with_format(row, 2, signal.as_str(), &self.cell)?;
            }
            if let Some(label) = patch.src_label() {
                sheet.write_string_with_format(row, 3, label, &self.cell)?;
            }
        }
        Ok(())
    }

    fn write_device_links(&self, sheet: &mut Worksheet, patches: &[RoutingPatch]) -> Result<()> {
        let columns = [
            ("Source Device", 20.0),
            ("Source. Ch.", 10.0),
            ("Dest. Device", 20.0),
            ("Dest. Ch.", 10.0),
        ];
        self.write_header(sheet, &columns)?;

        for (row, patch) in patches.iter().enumerate() {
            let row = row as u32 + 1;

            if let Some(source) = patch.primary() {
                sheet.write_string_with_format(row, 0, source.name.as_str(), &self.cell)?;
                sheet.write_string_with_format(row, 1, source.index.to_string(), &self.cell)?;
            }
            sheet.write_string_with_format(row, 2, patch.dst_name(), &self.cell)?;
            sheet.write_string_with_format(row, 3, patch.dst_index().to_string(), &self.cell)?;
        }
        Ok(())
    }

    fn write_header(&self, sheet: &mut Worksheet, columns: &[(&str, f64)]) -> Result<()> {
        for (col, (title, width)) in columns.iter().enumerate() {
            let col = col as u16;
            sheet.write_string_with_format(0, col, *title, &self.heading)?;
            sheet.set_column_width(col, *width)?;
        }
        Ok(())
    }
}
