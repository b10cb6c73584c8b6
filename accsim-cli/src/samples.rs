//! Bundled sample programs

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Sample {
    /// Sum of an array: data[0] is the length, elements follow
    Sum,
    /// Dot product of two arrays of length data[0]
    Convolution,
}

impl Sample {
    pub fn source(self) -> &'static str {
        match self {
            Sample::Sum => include_str!("../../programs/sum.asm"),
            Sample::Convolution => include_str!("../../programs/convolution.asm"),
        }
    }

    pub fn data(self) -> &'static str {
        match self {
            Sample::Sum => include_str!("../../programs/sum.data"),
            Sample::Convolution => include_str!("../../programs/convolution.data"),
        }
    }

    /// Accumulator after the sample halts
    pub fn expected(self) -> accsim_spec::Value {
        match self {
            Sample::Sum => 55,
            Sample::Convolution => 0,
        }
    }
}
