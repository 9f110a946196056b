//! # Flags
//!
//! Tagged half-edge encoding of polygonal faces.
//!
//! ## Overview
//!
//! A flag is a directed record `(face, from, to)`: inside `face`, vertex
//! `from` is followed (CCW) by vertex `to`. Operators describe the mesh they
//! build purely as a set of flags over [`VertexTag`]s and [`FaceTag`]s, then
//! [`flags_to_faces`] walks each face's flags back into an ordered cycle.
//!
//! ```text
//! faces ──faces_to_flags──▶ FlagSet ──flags_to_faces──▶ faces
//!                           (face, from) → Flag
//! ```
//!
//! Two keyings exist:
//! - [`FlagSet`]: keyed by `(face, from)`, one namespace per face
//! - [`EdgeFlags`]: keyed by the directed edge `(from, to)`, used to find the
//!   face lying across an edge

mod tag;


pub use tag::{FaceTag, VertexTag};

use std::collections::{BTreeMap, HashMap};

use glam::DVec3;

use crate::error::{ConwayError, ConwayResult};

// =============================================================================
// FLAG
// =============================================================================

/// Directed half-edge record: in `face`, `from` is followed by `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flag {
    /// Face the half-edge belongs to.
    pub face: FaceTag,
    /// Start vertex.
    pub from: VertexTag,
    /// Next vertex in CCW order.
    pub to: VertexTag,
}

impl Flag {
    /// Creates a flag.
    #[inline]
    pub fn new(face: FaceTag, from: VertexTag, to: VertexTag) -> Self {
        Self { face, from, to }
    }
}

// =============================================================================
// FLAG SET (default keying)
// =============================================================================

/// Flags keyed by `(face, from)`.
///
/// Iteration is ordered by face tag, then by start vertex tag, which makes
/// face discovery in [`flags_to_faces`] deterministic.
#[derive(Debug, Clone, Default)]
pub struct FlagSet {
    flags: BTreeMap<(FaceTag, VertexTag), Flag>,
}

impl FlagSet {
    /// Creates an empty flag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of flags.
    #[inline]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns true if there are no flags.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Inserts a flag.
    ///
    /// # Errors
    ///
    /// `InconsistentTopology` if the face already has a flag leaving `from`;
    /// a face visits each of its vertices exactly once.
    pub fn insert(&mut self, flag: Flag) -> ConwayResult<()> {
        let key = (flag.face, flag.from);
        if let Some(existing) = self.flags.insert(key, flag) {
            return Err(ConwayError::inconsistent(format!(
                "face {} leaves vertex {} twice (to {} and {})",
                flag.face, flag.from, existing.to, flag.to
            )));
        }
        Ok(())
    }

    /// Stamps out the flags of a complete face given its CCW vertex cycle.
    pub fn add_face(&mut self, face: FaceTag, vertices: &[VertexTag]) -> ConwayResult<()> {
        for flag in face_to_flags(face, vertices) {
            self.insert(flag)?;
        }
        Ok(())
    }

    /// Returns the flag leaving `from` inside `face`.
    #[inline]
    pub fn get(&self, face: FaceTag, from: VertexTag) -> Option<&Flag> {
        self.flags.get(&(face, from))
    }

    /// Iterates over all flags in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Flag> {
        self.flags.values()
    }
}

// =============================================================================
// EDGE FLAGS (edge keying)
// =============================================================================

/// Flags of an input mesh keyed by directed edge `(from, to)`.
///
/// A closed manifold mesh has exactly one flag per directed edge, and the
/// reverse edge belongs to the face across.
#[derive(Debug, Clone, Default)]
pub struct EdgeFlags {
    flags: HashMap<(usize, usize), FaceTag>,
}

impl EdgeFlags {
    /// Returns the number of directed edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns true if there are no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Returns the face owning the directed edge `from -> to`.
    #[inline]
    pub fn owner(&self, from: usize, to: usize) -> Option<FaceTag> {
        self.flags.get(&(from, to)).copied()
    }

    /// Returns the face lying across the directed edge `from -> to`, i.e. the
    /// owner of `to -> from`.
    ///
    /// # Errors
    ///
    /// `OpenEdge` if no face owns the reverse edge.
    pub fn across(&self, from: usize, to: usize) -> ConwayResult<FaceTag> {
        self.owner(to, from).ok_or(ConwayError::OpenEdge { from, to })
    }

    /// Checks that every directed edge has its reverse.
    ///
    /// # Errors
    ///
    /// `OpenEdge` naming the first unmatched edge (in index order).
    pub fn require_closed(&self) -> ConwayResult<()> {
        let mut edges: Vec<_> = self.flags.keys().copied().collect();
        edges.sort_unstable();
        for (from, to) in edges {
            self.across(from, to)?;
        }
        Ok(())
    }
}

// =============================================================================
// VERTEX TABLE
// =============================================================================

/// Maps vertex tags to final vertex indices.
#[derive(Debug, Clone, Default)]
pub struct VertexTable {
    indices: HashMap<VertexTag, usize>,
}

impl VertexTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the identity table `Original(i) -> i` for `count` vertices.
    pub fn identity(count: usize) -> Self {
        Self {
            indices: (0..count).map(|i| (VertexTag::Original(i), i)).collect(),
        }
    }

    /// Records the index of a tag.
    ///
    /// # Errors
    ///
    /// `InconsistentTopology` if the tag is already bound; a tag names
    /// exactly one vertex.
    pub fn insert(&mut self, tag: VertexTag, index: usize) -> ConwayResult<()> {
        if let Some(previous) = self.indices.insert(tag, index) {
            return Err(ConwayError::inconsistent(format!(
                "vertex tag {tag} bound twice (indices {previous} and {index})"
            )));
        }
        Ok(())
    }

    /// Returns the index bound to a tag.
    #[inline]
    pub fn get(&self, tag: VertexTag) -> Option<usize> {
        self.indices.get(&tag).copied()
    }

    /// Returns true if the tag is bound.
    #[inline]
    pub fn contains(&self, tag: VertexTag) -> bool {
        self.indices.contains_key(&tag)
    }

    /// Returns the number of bound tags.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if no tag is bound.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Growing vertex list paired with its tag table.
///
/// Operators push every new vertex through this so a tag and its index are
/// always bound together.
#[derive(Debug, Clone, Default)]
pub struct TaggedVertices {
    vertices: Vec<DVec3>,
    table: VertexTable,
}

impl TaggedVertices {
    /// Starts from the input vertices, tagged `Original(i)`.
    pub fn with_originals(vertices: &[DVec3]) -> Self {
        Self {
            vertices: vertices.to_vec(),
            table: VertexTable::identity(vertices.len()),
        }
    }

    /// Starts with no vertices.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends a vertex under `tag` and returns its index.
    pub fn push(&mut self, tag: VertexTag, position: DVec3) -> ConwayResult<usize> {
        let index = self.vertices.len();
        self.table.insert(tag, index)?;
        self.vertices.push(position);
        Ok(index)
    }

    /// Returns true if `tag` already names a vertex.
    #[inline]
    pub fn contains(&self, tag: VertexTag) -> bool {
        self.table.contains(tag)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if there are no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Splits into the vertex list and the tag table.
    pub fn into_parts(self) -> (Vec<DVec3>, VertexTable) {
        (self.vertices, self.table)
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Resolves the tag of face `index`, defaulting to `FaceTag::Original(index)`.
fn face_tag_at(face_tags: Option<&[FaceTag]>, index: usize) -> FaceTag {
    face_tags
        .map(|tags| tags[index])
        .unwrap_or(FaceTag::Original(index))
}

fn check_face_tags(faces: &[Vec<usize>], face_tags: Option<&[FaceTag]>) -> ConwayResult<()> {
    match face_tags {
        Some(tags) if tags.len() != faces.len() => Err(ConwayError::invalid_parameter(format!(
            "{} face tags supplied for {} faces",
            tags.len(),
            faces.len()
        ))),
        _ => Ok(()),
    }
}

/// Cyclic consecutive pairs of a face: `(f0, f1), (f1, f2), ..., (fn, f0)`.
pub(crate) fn cyclic_pairs<T: Copy>(items: &[T]) -> impl Iterator<Item = (T, T)> + '_ {
    let n = items.len();
    (0..n).map(move |i| (items[i], items[(i + 1) % n]))
}

/// Cyclic consecutive triples of a face: `(prev, current, next)` for every
/// position, starting with `(f0, f1, f2)`.
pub(crate) fn cyclic_triples<T: Copy>(items: &[T]) -> impl Iterator<Item = (T, T, T)> + '_ {
    let n = items.len();
    (0..n).map(move |i| (items[i], items[(i + 1) % n], items[(i + 2) % n]))
}

/// Encodes faces as flags keyed by `(face, from)`.
///
/// Face `i` is tagged `face_tags[i]` when tags are supplied, otherwise
/// `FaceTag::Original(i)`. Returns the flags and the identity table for
/// every vertex the faces reference.
///
/// # Errors
///
/// - `InvalidParameter` if `face_tags` does not have one tag per face
/// - `InconsistentTopology` on a key collision (duplicate face tag or a
///   vertex repeated inside a face)
///
/// # Example
///
/// ```rust
/// use conway_mesh::flags::{faces_to_flags, flags_to_faces};
///
/// let faces = vec![vec![0, 1, 2], vec![0, 2, 3]];
/// let (flags, table) = faces_to_flags(&faces, None).unwrap();
/// assert_eq!(flags.len(), 6);
///
/// let (decoded, _) = flags_to_faces(&flags, &table).unwrap();
/// assert_eq!(decoded, faces);
/// ```
pub fn faces_to_flags(
    faces: &[Vec<usize>],
    face_tags: Option<&[FaceTag]>,
) -> ConwayResult<(FlagSet, VertexTable)> {
    check_face_tags(faces, face_tags)?;

    let mut flags = FlagSet::new();
    let mut table = VertexTable::new();

    for (face_index, face) in faces.iter().enumerate() {
        let face_tag = face_tag_at(face_tags, face_index);
        for (v1, v2) in cyclic_pairs(face) {
            flags.insert(Flag::new(
                face_tag,
                VertexTag::Original(v1),
                VertexTag::Original(v2),
            ))?;
            if !table.contains(VertexTag::Original(v1)) {
                table.insert(VertexTag::Original(v1), v1)?;
            }
        }
    }

    Ok((flags, table))
}

/// Encodes faces as flags keyed by directed edge `(from, to)`.
///
/// # Errors
///
/// - `InvalidParameter` if `face_tags` does not have one tag per face
/// - `NonManifoldEdge` if a directed edge occurs twice, which happens when
///   an edge is shared by more than two faces or neighbouring faces are
///   wound inconsistently
pub fn faces_to_edge_flags(
    faces: &[Vec<usize>],
    face_tags: Option<&[FaceTag]>,
) -> ConwayResult<EdgeFlags> {
    check_face_tags(faces, face_tags)?;

    let mut edges = EdgeFlags::default();
    for (face_index, face) in faces.iter().enumerate() {
        let face_tag = face_tag_at(face_tags, face_index);
        for (v1, v2) in cyclic_pairs(face) {
            if edges.flags.insert((v1, v2), face_tag).is_some() {
                return Err(ConwayError::NonManifoldEdge { from: v1, to: v2 });
            }
        }
    }

    Ok(edges)
}

/// Returns the flags of one complete face given its CCW vertex cycle.
pub fn face_to_flags(face: FaceTag, vertices: &[VertexTag]) -> Vec<Flag> {
    cyclic_pairs(vertices)
        .map(|(from, to)| Flag::new(face, from, to))
        .collect()
}

// =============================================================================
// DECODING
// =============================================================================

/// Reassembles ordered faces from a flag set.
///
/// For every face tag the flags are counted, then followed `from -> to`
/// from the face's first start vertex until the count is reached. The
/// resulting tag cycle is translated through `table`.
///
/// Returns the faces and the parallel list of face tags, ordered by face tag.
///
/// # Errors
///
/// `InconsistentTopology` if a face's flags do not form exactly one closed
/// cycle (missing flag, early return to the start, no return to the start)
/// or a vertex tag is not in `table`.
pub fn flags_to_faces(
    flags: &FlagSet,
    table: &VertexTable,
) -> ConwayResult<(Vec<Vec<usize>>, Vec<FaceTag>)> {
    // Vertex count and one start vertex per face
    let mut face_info: BTreeMap<FaceTag, (usize, VertexTag)> = BTreeMap::new();
    for flag in flags.iter() {
        face_info
            .entry(flag.face)
            .and_modify(|(count, _)| *count += 1)
            .or_insert((1, flag.from));
    }

    let mut faces = Vec::with_capacity(face_info.len());
    let mut face_tags = Vec::with_capacity(face_info.len());

    for (face_tag, (count, start)) in face_info {
        let mut cycle = Vec::with_capacity(count);
        cycle.push(start);

        let mut current = start;
        for _ in 1..count {
            let next = next_vertex(flags, face_tag, current)?;
            if next == start {
                return Err(ConwayError::inconsistent(format!(
                    "face {face_tag} closed after {} of {count} vertices",
                    cycle.len()
                )));
            }
            cycle.push(next);
            current = next;
        }

        if next_vertex(flags, face_tag, current)? != start {
            return Err(ConwayError::inconsistent(format!(
                "face {face_tag} does not close after {count} vertices"
            )));
        }

        let face = cycle
            .iter()
            .map(|&tag| {
                table.get(tag).ok_or_else(|| {
                    ConwayError::inconsistent(format!(
                        "face {face_tag} uses vertex {tag} which has no index"
                    ))
                })
            })
            .collect::<ConwayResult<Vec<_>>>()?;

        faces.push(face);
        face_tags.push(face_tag);
    }

    Ok((faces, face_tags))
}

fn next_vertex(flags: &FlagSet, face: FaceTag, from: VertexTag) -> ConwayResult<VertexTag> {
    flags.get(face, from).map(|flag| flag.to).ok_or_else(|| {
        ConwayError::inconsistent(format!("face {face} has no flag leaving vertex {from}"))
    })
}
