use std::sync::Arc;

use num_complex::Complex;

use crate::math::Scalar;

use super::component::Component;

/// How the members of a [`Network`] are wired together.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionKind {
    /// Series connection (impedances add).
    Series,
    /// Parallel connection (admittances add).
    Parallel,
}

/// Group of ideal components sharing one connection style, such as the
/// inductor and capacitor bank of a tank.
pub struct Network {
    name: String,
    connection: ConnectionKind,
    members: Vec<Arc<dyn Component + Send + Sync>>,
}

impl Network {
    /// Creates an empty network.
    #[must_use]
    pub fn new(name: impl Into<String>, connection: ConnectionKind) -> Self {
        Self {
            name: name.into(),
            connection,
            members: Vec::new(),
        }
    }

    /// Adds a component to the network.
    pub fn add_component<C>(&mut self, component: C)
    where
        C: Component + Send + Sync + 'static,
    {
        self.members.push(Arc::new(component));
    }

    /// Builder form of [`Network::add_component`].
    #[must_use]
    pub fn with_component<C>(mut self, component: C) -> Self
    where
        C: Component + Send + Sync + 'static,
    {
        self.add_component(component);
        self
    }

    /// Aggregate impedance at angular frequency `omega`.
    ///
    /// A parallel network whose admittances cancel (an ideal tank exactly at
    /// resonance) reports infinite impedance.
    #[must_use]
    pub fn impedance(&self, omega: Scalar) -> Complex<Scalar> {
        match self.connection {
            ConnectionKind::Series => self
                .members
                .iter()
                .map(|component| component.impedance(omega))
                .sum(),
            ConnectionKind::Parallel => {
                let mut admittance = Complex::<Scalar>::default();
                for component in &self.members {
                    let z = component.impedance(omega);
                    if z.norm() <= Scalar::EPSILON {
                        return Complex::new(0.0, 0.0);
                    }
                    if z.is_finite() {
                        admittance += z.inv();
                    }
                }

                if admittance.norm() <= Scalar::EPSILON {
                    Complex::new(Scalar::INFINITY, 0.0)
                } else {
                    admittance.inv()
                }
            }
        }
    }

    /// Name of the network.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Connection topology.
    #[must_use]
    pub const fn connection_kind(&self) -> ConnectionKind {
        self.connection
    }

    /// Number of components in the network.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when no components are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl std::fmt::Debug for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.members.iter().map(|m| m.name()).collect();
        f.debug_struct("Network")
            .field("name", &self.name)
            .field("connection", &self.connection)
            .field("members", &names)
            .finish()
    }
}
