/// Example upload in the product tile layout, offered to operators as a
/// starting point.
pub const TEMPLATE_CSV: &str = "\
Tile-image src,Product-tile href,Product-tile,Value,Value (numeric),Description
https://cdn.example.com/tiles/linen-shirt.jpg,https://shop.example.com/products/linen-shirt/1316169WYM.html,Linen Shirt,$89.00,89.00,Relaxed linen shirt in natural white
https://cdn.example.com/tiles/wool-scarf.jpg,https://shop.example.com/products/wool-scarf/2201487SCF.html,Wool Scarf,\"$1,020.00\",,\"Merino wool, hand finished\"
";
