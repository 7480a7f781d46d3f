//! Conversion between the types in [`super::schema`] and those used in
//! normal operation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::schema;
use crate::math::{GridSize, Vol};

/// Flattens a [`Vol`] back into the document's nested `[x][y][z]` arrays.
fn vol_to_nested<V, S>(vol: &Vol<V>, mut f: impl FnMut(&V) -> S) -> Vec<Vec<Vec<S>>> {
    let mut linear = vol.as_linear().iter();
    let size = vol.size();
    (0..size.width)
        .map(|_| {
            (0..size.height)
                .map(|_| {
                    (0..size.depth)
                        .map(|_| f(linear.next().expect("Vol length invariant violated")))
                        .collect()
                })
                .collect()
        })
        .collect()
}

/// Builds a [`Vol`] from the document's nested `[x][y][z]` arrays, verifying
/// that they are rectangular.
fn vol_from_nested<S, V, E: serde::de::Error>(
    data: Vec<Vec<Vec<S>>>,
    field: &str,
    mut f: impl FnMut(S) -> V,
) -> Result<Vol<V>, E> {
    let width = data.len();
    let height = data.first().map_or(0, Vec::len);
    let depth = data
        .first()
        .and_then(|plane| plane.first())
        .map_or(0, Vec::len);

    let mut elements: Vec<V> = Vec::with_capacity(width * height * depth);
    for (x, plane) in data.into_iter().enumerate() {
        if plane.len() != height {
            return Err(E::custom(format!(
                "{field} has unequal dimensionality: \
                    [{x}] has {len} columns, expected {height}",
                len = plane.len(),
            )));
        }
        for (y, column) in plane.into_iter().enumerate() {
            if column.len() != depth {
                return Err(E::custom(format!(
                    "{field} has unequal dimensionality: \
                        [{x}][{y}] has {len} cells, expected {depth}",
                    len = column.len(),
                )));
            }
            elements.extend(column.into_iter().map(&mut f));
        }
    }

    let size = GridSize::new(width as u32, height as u32, depth as u32);
    Vol::from_elements(size, elements).map_err(E::custom)
}

mod voxel {
    use super::*;
    use crate::voxel::Voxel;

    impl Serialize for Voxel {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            to_schema(self).serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Voxel {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Ok(from_schema(schema::VoxelSer::deserialize(deserializer)?))
        }
    }

    pub(super) fn to_schema(voxel: &Voxel) -> schema::VoxelSer {
        [voxel.red, voxel.green, voxel.blue, voxel.alpha]
    }

    pub(super) fn from_schema([red, green, blue, alpha]: schema::VoxelSer) -> Voxel {
        Voxel::new(red, green, blue, alpha)
    }
}

mod cube {
    use super::*;
    use crate::attributes::Attributes;
    use crate::cube::Cube;

    impl Serialize for Cube {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            to_schema(self).serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Cube {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            from_schema(schema::CubeSer::deserialize(deserializer)?)
        }
    }

    pub(super) fn to_schema(cube: &Cube) -> schema::CubeSer {
        let attributes = cube.attributes();
        schema::CubeSer {
            name: attributes.name.clone(),
            description: attributes.description.clone(),
            author: attributes.author.clone(),
            vox: vol_to_nested(cube.voxels(), voxel::to_schema),
        }
    }

    pub(super) fn from_schema<E: serde::de::Error>(value: schema::CubeSer) -> Result<Cube, E> {
        let schema::CubeSer {
            name,
            description,
            author,
            vox,
        } = value;
        Ok(Cube::new(
            Attributes {
                name,
                description,
                author,
            },
            vol_from_nested(vox, "vox", voxel::from_schema)?,
        ))
    }
}

mod world {
    use super::*;
    use crate::attributes::Attributes;
    use crate::world::World;

    impl Serialize for World {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let attributes = self.attributes();
            schema::WorldSer {
                name: attributes.name.clone(),
                description: attributes.description.clone(),
                author: attributes.author.clone(),
                cube: self.blocks().iter().map(cube::to_schema).collect(),
                space: vol_to_nested(self.space(), |&index| index),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for World {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let schema::WorldSer {
                name,
                description,
                author,
                cube,
                space,
            } = schema::WorldSer::deserialize(deserializer)?;
            Ok(World::new(
                Attributes {
                    name,
                    description,
                    author,
                },
                cube.into_iter()
                    .map(cube::from_schema)
                    .collect::<Result<Vec<_>, D::Error>>()?,
                vol_from_nested(space, "space", |index| index)?,
            ))
        }
    }
}
