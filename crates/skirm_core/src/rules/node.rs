use crate::is_default;
use crate::terrain::MovementType;
use crate::vec3::IVec3;

/// An outgoing connection from a patrol node. A negative target is an exit
/// off the map edge instead of another node.
#[derive(
    serde::Serialize,
    serde::Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    bincode::Encode,
    bincode::Decode,
)]
#[serde(default)]
pub struct NodeLink {
    pub target: i32,
    pub distance: i32,
    pub travel: MovementType,
}

impl Default for NodeLink {
    fn default() -> Self {
        Self {
            target: -1,
            distance: 0,
            travel: MovementType::Walk,
        }
    }
}

impl NodeLink {
    pub fn is_exit(&self) -> bool {
        self.target < 0
    }
}

/// One patrol/spawn node of a map block route.
#[derive(
    serde::Serialize,
    serde::Deserialize,
    Debug,
    Default,
    Clone,
    PartialEq,
    Eq,
    bincode::Encode,
    bincode::Decode,
)]
#[serde(default)]
pub struct Spawnpoint {
    pub position: IVec3,
    pub segment: i32,
    pub unit_type: i32,
    pub rank: i32,
    pub priority: i32,
    pub flags: i32,

    #[serde(default, skip_serializing_if = "is_default")]
    pub links: Vec<NodeLink>,
}

/// The ordered node list of one route, owning its spawnpoints.
/// Link targets index into this list.
#[derive(
    serde::Serialize,
    serde::Deserialize,
    Debug,
    Default,
    Clone,
    PartialEq,
    Eq,
    bincode::Encode,
    bincode::Decode,
)]
#[serde(default)]
pub struct Route {
    pub name: String,

    #[serde(default, skip_serializing_if = "is_default")]
    pub nodes: Vec<Spawnpoint>,
}

impl Route {
    pub fn get(&self, index: usize) -> Option<&Spawnpoint> {
        self.nodes.get(index)
    }

    /// The node a link points at, `None` for map exits and dangling targets.
    pub fn linked_node(&self, link: &NodeLink) -> Option<&Spawnpoint> {
        if link.is_exit() {
            return None;
        }
        self.nodes.get(link.target as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v;

    fn route() -> Route {
        Route {
            name: "patrol".to_string(),
            nodes: vec![
                Spawnpoint {
                    position: v!(4, 4, 0),
                    links: vec![
                        NodeLink {
                            target: 1,
                            distance: 3,
                            travel: MovementType::Walk,
                        },
                        NodeLink::default(),
                    ],
                    ..Default::default()
                },
                Spawnpoint {
                    position: v!(7, 4, 1),
                    ..Default::default()
                },
            ],
        }
    }

    #[test]
    fn links_resolve_to_nodes() {
        let route = route();
        let node = route.get(0).unwrap();
        let linked = route.linked_node(&node.links[0]).unwrap();
        assert_eq!(linked.position, v!(7, 4, 1));
    }

    #[test]
    fn exits_and_dangling_targets_resolve_to_none() {
        let route = route();
        let node = route.get(0).unwrap();
        assert!(node.links[1].is_exit());
        assert!(route.linked_node(&node.links[1]).is_none());
        let dangling = NodeLink {
            target: 9,
            ..Default::default()
        };
        assert!(route.linked_node(&dangling).is_none());
    }
}
