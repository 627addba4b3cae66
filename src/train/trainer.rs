use crate::{
    error::{NetworkError, Result},
    loss::mse::MseLoss,
    network::network::Network,
};

/// Fails unless `inputs` and `targets` are non-empty and index-aligned.
pub(crate) fn check_dataset(inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<()> {
    if inputs.is_empty() {
        return Err(NetworkError::EmptyDataset);
    }
    if inputs.len() != targets.len() {
        return Err(NetworkError::LengthMismatch {
            inputs: inputs.len(),
            targets: targets.len(),
        });
    }
    Ok(())
}

/// One online epoch: every example in list order gets a forward pass, then an
/// immediate weight update.
///
/// Returns the squared error summed over all examples and outputs, divided by
/// the number of examples. Each example's error is measured before its own
/// update.
pub fn train_epoch(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
) -> Result<f64> {
    check_dataset(inputs, targets)?;

    let mut total_loss = 0.0;

    for (input, target) in inputs.iter().zip(targets.iter()) {
        let output = network.forward(input)?;
        total_loss += MseLoss::sum_squared(&output, target);
        network.backward(input, target)?;
    }

    Ok(total_loss / inputs.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;
    use crate::network::spec::NetworkSpec;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rejects_empty_and_misaligned_datasets() {
        let mut net = Network::new(NetworkSpec::default(), &mut StdRng::seed_from_u64(3)).unwrap();
        assert!(matches!(train_epoch(&mut net, &[], &[]), Err(NetworkError::EmptyDataset)));
        let inputs = vec![vec![0.0, 1.0], vec![1.0, 1.0]];
        let targets = vec![vec![1.0]];
        assert!(matches!(
            train_epoch(&mut net, &inputs, &targets),
            Err(NetworkError::LengthMismatch { inputs: 2, targets: 1 })
        ));
    }

    #[test]
    fn loss_with_frozen_weights_matches_manual_sum() {
        let mut net = Network::new(NetworkSpec::new(2, 4, 1, 0.0), &mut StdRng::seed_from_u64(5)).unwrap();
        let (inputs, targets) = dataset::xor();

        let mut expected = 0.0;
        for (x, y) in inputs.iter().zip(&targets) {
            let out = net.forward(x).unwrap();
            expected += (y[0] - out[0]).powi(2);
        }
        expected /= 4.0;

        let loss = train_epoch(&mut net, &inputs, &targets).unwrap();
        assert!((loss - expected).abs() < 1e-12);
    }

    #[test]
    fn stops_at_first_malformed_example() {
        let mut net = Network::new(NetworkSpec::default(), &mut StdRng::seed_from_u64(8)).unwrap();
        let inputs = vec![vec![0.0, 1.0], vec![1.0]];
        let targets = vec![vec![1.0], vec![0.0]];
        assert!(matches!(
            train_epoch(&mut net, &inputs, &targets),
            Err(NetworkError::DimensionMismatch { .. })
        ));
    }
}
