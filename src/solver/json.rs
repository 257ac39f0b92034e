#![allow(non_snake_case)]
use crate::{
    algebra::*,
    prox::ProxFn,
    solver::{Settings, Solver},
};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

// A struct very similar to the problem data, but holding the
// user-facing form of everything (i.e. no equilibration applied).

#[derive(Serialize, Deserialize)]
#[serde(bound = "T: Serialize + DeserializeOwned")]
struct JsonProblemData<T: FloatT> {
    pub A: LinearOperator<T>,
    pub f: Vec<ProxFn<T>>,
    pub g: Vec<ProxFn<T>>,
    pub settings: Settings<T>,
}

impl<T> Solver<T>
where
    T: FloatT + DeserializeOwned + Serialize,
{
    /// Write the problem data and settings to a file as json, in the
    /// caller's original scaling.
    pub fn write_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let mut json_data = JsonProblemData {
            A: self.problem.A.clone(),
            f: self.problem.f.clone(),
            g: self.problem.g.clone(),
            settings: self.settings.clone(),
        };

        // restore scaling to original
        let eq = &self.problem.equilibration;
        json_data.A.lscale(&eq.einv);
        json_data.A.rscale(&eq.dinv);
        for (term, &e) in std::iter::zip(&mut json_data.f, &eq.e) {
            term.a *= e;
        }
        for (term, &dinv) in std::iter::zip(&mut json_data.g, &eq.dinv) {
            term.a *= dinv;
        }

        // sanitize settings to remove values that
        // can't be serialized, i.e. infs
        sanitize_settings(&mut json_data.settings);

        let json = serde_json::to_string(&json_data)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }

    /// Construct a solver from a problem previously written with
    /// [`Solver::write_to_file`].
    pub fn read_from_file(file: &mut File) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let mut json_data: JsonProblemData<T> = serde_json::from_str(&buffer)?;

        // restore sanitized settings to their (likely) original values
        desanitize_settings(&mut json_data.settings);

        let solver = Self::new(
            &json_data.A,
            &json_data.f,
            &json_data.g,
            json_data.settings,
        )
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

        Ok(solver)
    }
}

fn sanitize_settings<T: FloatT>(settings: &mut Settings<T>) {
    if settings.time_limit == f64::INFINITY {
        settings.time_limit = f64::MAX;
    }
}

fn desanitize_settings<T: FloatT>(settings: &mut Settings<T>) {
    if settings.time_limit == f64::MAX {
        settings.time_limit = f64::INFINITY;
    }
}

#[test]
fn test_json_io() {
    use crate::prox::Kernel;
    use std::io::{Seek, SeekFrom};

    // lasso-flavoured 2x2 problem
    let A: LinearOperator<f64> =
        DenseMatrix::new(2, 2, vec![3., 1., 1., 2.], MatrixLayout::RowMajor)
            .unwrap()
            .into();
    let f = vec![
        ProxFn::new(Kernel::Square).with_offset(1.0),
        ProxFn::new(Kernel::Square).with_offset(-0.5),
    ];
    let g = vec![ProxFn::new(Kernel::Abs).with_weight(0.1); 2];

    let settings = crate::solver::SettingsBuilder::default().build().unwrap();

    let mut solver = Solver::<f64>::new(&A, &f, &g, settings).unwrap();
    solver.solve();

    // write the problem to a file
    let mut file = tempfile::tempfile().unwrap();
    solver.write_to_file(&mut file).unwrap();

    // read the problem back and re-solve
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut solver2 = Solver::<f64>::read_from_file(&mut file).unwrap();
    solver2.solve();
    assert!(solver.solution.x.norm_inf_diff(&solver2.solution.x) < 1e-8);
}
