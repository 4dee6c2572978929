pub mod pincode_coords;
