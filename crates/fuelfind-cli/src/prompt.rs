//! Interactive collection of search inputs.
//!
//! Each prompt re-asks until the answer is usable. Only a closed input
//! stream or a write failure ends the session early.

use std::io::{BufRead, Write};

use fuelfind_core::{Product, SearchMode, SearchRequest};

const BANNER: &str = "\n\
============================================================\n\
=====      Búsqueda de Estaciones de Combustible       =====\n\
============================================================\n";

const MODE_MENU: &str = "\nCasos de búsqueda:\n\n\
1) Estación más cercana\n\
2) Estación más cercana entre las más baratas\n\
3) Estación más cercana con tienda\n\
4) Estación más cercana con tienda entre las más baratas\n";

pub(crate) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Walks the user through coordinates, product and search case.
    pub(crate) fn collect_request(&mut self) -> anyhow::Result<SearchRequest> {
        writeln!(self.output, "{BANNER}")?;
        writeln!(self.output, "\nIngrese los siguientes datos:")?;

        let lat = self.read_in_range(
            "Latitud  (ej: -33.4489): ",
            -90.0..=90.0,
            "Latitud fuera de rango (-90 a 90). Inténtalo de nuevo.",
        )?;
        let lng = self.read_in_range(
            "Longitud (ej: -70.6693): ",
            -180.0..=180.0,
            "Longitud fuera de rango (-180 a 180). Inténtalo de nuevo.",
        )?;
        let product = self.read_product("Producto (93 | 95 | 97 | Diesel | Kerosene): ")?;

        writeln!(self.output, "{MODE_MENU}")?;
        let mode = self.read_mode("Elige 1/2/3/4: ")?;

        Ok(SearchRequest {
            lat,
            lng,
            product,
            mode,
        })
    }

    fn read_line(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            anyhow::bail!("la entrada estándar se cerró antes de completar la búsqueda");
        }
        Ok(line.trim().to_string())
    }

    fn read_float(&mut self, prompt: &str) -> anyhow::Result<f64> {
        loop {
            let answer = self.read_line(prompt)?.replace(',', ".");
            match answer.parse::<f64>() {
                Ok(v) if v.is_finite() => return Ok(v),
                _ => writeln!(self.output, "Ingresa un número válido (usa punto decimal).")?,
            }
        }
    }

    fn read_in_range(
        &mut self,
        prompt: &str,
        range: std::ops::RangeInclusive<f64>,
        out_of_range: &str,
    ) -> anyhow::Result<f64> {
        loop {
            let value = self.read_float(prompt)?;
            if range.contains(&value) {
                return Ok(value);
            }
            writeln!(self.output, "{out_of_range}")?;
        }
    }

    /// Returns the raw answer once it maps to a product; the search maps it
    /// again so both entry points share one validation path.
    fn read_product(&mut self, prompt: &str) -> anyhow::Result<String> {
        loop {
            let answer = self.read_line(prompt)?.to_lowercase();
            match Product::from_input(&answer) {
                Ok(_) => return Ok(answer),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn read_mode(&mut self, prompt: &str) -> anyhow::Result<SearchMode> {
        loop {
            let answer = self.read_line(prompt)?;
            if let Some(mode) = SearchMode::from_menu_choice(&answer) {
                return Ok(mode);
            }
            writeln!(self.output, "Opción inválida. Elige una de: 1, 2, 3, 4")?;
        }
    }
}
