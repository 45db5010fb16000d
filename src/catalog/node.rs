//! Domains that apply to nodes.

domain_table! {
    /// Node `shape` values.
    pub enum NodeShape {
        Box => "box",
        Polygon => "polygon",
        Ellipse => "ellipse",
        Oval => "oval",
        Circle => "circle",
        Point => "point",
        Egg => "egg",
        Triangle => "triangle",
        PlainText => "plaintext",
        Diamond => "diamond",
        Trapezium => "trapezium",
        Parallelogram => "parallelogram",
        House => "house",
        Pentagon => "pentagon",
        Hexagon => "hexagon",
        Septagon => "septagon",
        Octagon => "octagon",
        DoubleCircle => "doublecircle",
        DoubleOctagon => "doubleoctagon",
        TripleOctagon => "tripleoctagon",
        InvTriangle => "invtriangle",
        InvTrapezium => "invtrapezium",
        InvHouse => "invhouse",
        MDiamond => "Mdiamond",
        MSquare => "Msquare",
        MCircle => "Mcircle",
        Rect => "rect",
        Rectangle => "rectangle",
        Square => "square",
        None => "none",
        Note => "note",
        Tab => "tab",
        Folder => "folder",
        Box3d => "box3d",
        Component => "component",
    }
}

domain_table! {
    /// Node `style` values.
    ///
    /// `filled`, `diagonals`, `rounded` and `radial` only make sense on nodes, which is
    /// why this domain is separate from [`EdgeStyle`](crate::catalog::EdgeStyle).
    pub enum NodeStyle {
        Dashed => "dashed",
        Dotted => "dotted",
        Solid => "solid",
        Invis => "invis",
        Bold => "bold",
        Filled => "filled",
        Diagonals => "diagonals",
        Rounded => "rounded",
        Radial => "radial",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DomainValue;
    use strum::EnumCount;

    #[test]
    fn test_node_shape_table() {
        assert_eq!(NodeShape::COUNT, 36);
        assert_eq!(NodeShape::Box.index(), 1);
        assert_eq!(NodeShape::MDiamond.as_token(), "Mdiamond");
        assert_eq!(NodeShape::Component.index(), 35);
        assert_eq!(NodeShape::Component.as_token(), "component");
    }

    #[test]
    fn test_node_style_table() {
        assert_eq!(NodeStyle::COUNT, 10);
        assert_eq!(NodeStyle::Filled.as_token(), "filled");
        assert_eq!(NodeStyle::Radial.index(), 9);
    }

    #[test]
    fn test_display_writes_token() {
        assert_eq!(format!("shape={}", NodeShape::DoubleCircle), "shape=doublecircle");
        assert_eq!(NodeStyle::Unset.to_string(), "");
    }
}
