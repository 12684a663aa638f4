use super::{MLP_SIZE, MLP_TOPOLOGY};
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::util::{read_matrix_from_file, write_matrix_into_file};
use std::fs;
use std::path::{Path, PathBuf};

/// The weights and biases of every layer, in layer order.
#[derive(Clone, Debug)]
pub struct Weights {
    pub weights: Vec<Matrix>,
    pub biases: Vec<Matrix>,
}

impl Weights {
    /// Reads one raw f32 file per layer for the weights and the biases, in layer order.
    pub fn from_files<P>(weight_files: &[P], bias_files: &[P]) -> Result<Weights>
    where
        P: AsRef<Path>,
    {
        if weight_files.len() != MLP_SIZE || bias_files.len() != MLP_SIZE {
            return Err(Error::Dimension {
                op: "weight loading",
                detail: format!(
                    "expected {0} weight and {0} bias files, got {1} and {2}",
                    MLP_SIZE,
                    weight_files.len(),
                    bias_files.len()
                ),
            });
        }

        let mut weights = Vec::with_capacity(MLP_SIZE);
        let mut biases = Vec::with_capacity(MLP_SIZE);
        for (spec, (w_file, b_file)) in MLP_TOPOLOGY
            .iter()
            .zip(weight_files.iter().zip(bias_files.iter()))
        {
            debug!(
                "Load weights: {}, bias: {}.",
                w_file.as_ref().display(),
                b_file.as_ref().display()
            );
            weights.push(read_matrix_from_file(w_file, spec.weights)?);
            biases.push(read_matrix_from_file(b_file, spec.bias)?);
        }
        Ok(Weights { weights, biases })
    }

    /// Reads `w1.bin`..`w4.bin` and `b1.bin`..`b4.bin` from `dir`.
    pub fn from_dir<P>(dir: P) -> Result<Weights>
    where
        P: AsRef<Path>,
    {
        let (weight_files, bias_files) = file_names(dir.as_ref());
        Weights::from_files(&weight_files, &bias_files)
    }

    /// All-zero weights and biases shaped as the network expects.
    pub fn zeros() -> Result<Weights> {
        Ok(Weights {
            weights: MLP_TOPOLOGY
                .iter()
                .map(|spec| Matrix::with_dims(spec.weights))
                .collect::<Result<Vec<Matrix>>>()?,
            biases: MLP_TOPOLOGY
                .iter()
                .map(|spec| Matrix::with_dims(spec.bias))
                .collect::<Result<Vec<Matrix>>>()?,
        })
    }

    /// Writes the weights into `dir` using the file names [`Weights::from_dir`] reads.
    pub fn write_into_dir<P>(&self, dir: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        fs::create_dir_all(dir.as_ref())?;
        let (weight_files, bias_files) = file_names(dir.as_ref());
        for (mtx, file) in self.weights.iter().zip(weight_files.iter()) {
            write_matrix_into_file(file, mtx)?;
        }
        for (mtx, file) in self.biases.iter().zip(bias_files.iter()) {
            write_matrix_into_file(file, mtx)?;
        }
        Ok(())
    }
}

fn file_names(dir: &Path) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let names = |prefix: &str| {
        (1..=MLP_SIZE)
            .map(|n| dir.join(format!("{}{}.bin", prefix, n)))
            .collect::<Vec<PathBuf>>()
    };
    (names("w"), names("b"))
}
